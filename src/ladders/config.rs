//! Snakes & Ladders table configuration.

use serde::{Deserialize, Serialize};

use super::board::BoardConfig;

/// Everything needed to start a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaddersConfig {
    /// Seats at the table (2-4).
    pub player_count: usize,

    /// Optional display names in seat order.
    pub player_names: Vec<String>,

    /// Dice RNG seed. Same seed, same game.
    pub seed: u64,

    /// Shortcut tables.
    pub board: BoardConfig,
}

impl Default for LaddersConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            player_names: Vec::new(),
            seed: 42,
            board: BoardConfig::default(),
        }
    }
}

impl LaddersConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }
}
