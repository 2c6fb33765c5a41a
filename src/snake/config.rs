//! Snake configuration.

use serde::{Deserialize, Serialize};

use super::game::SnakeError;

/// Smallest playable grid.
pub const MIN_GRID_SIZE: u16 = 4;

/// Largest grid. Food placement scans every tile, and coordinates are `i16`.
pub const MAX_GRID_SIZE: u16 = 256;

/// Grid size and pacing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Tiles per side of the square grid.
    pub grid_size: u16,

    /// Tick interval at the start of a run.
    pub start_interval_ms: u32,

    /// Fastest tick interval.
    pub min_interval_ms: u32,

    /// Interval reduction applied at each speed-up.
    pub interval_step_ms: u32,

    /// Speed up whenever the score is a multiple of this.
    pub speedup_every: u32,

    /// Points per food eaten.
    pub points_per_food: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            start_interval_ms: 150,
            min_interval_ms: 50,
            interval_step_ms: 10,
            speedup_every: 50,
            points_per_food: 10,
        }
    }
}

impl SnakeConfig {
    pub fn with_grid_size(mut self, size: u16) -> Self {
        self.grid_size = size;
        self
    }

    pub fn with_start_interval(mut self, ms: u32) -> Self {
        self.start_interval_ms = ms;
        self
    }

    pub fn with_points_per_food(mut self, points: u32) -> Self {
        self.points_per_food = points;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SnakeError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(SnakeError::GridTooSmall {
                size: self.grid_size,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(SnakeError::GridTooLarge {
                size: self.grid_size,
            });
        }
        if self.min_interval_ms == 0 || self.min_interval_ms > self.start_interval_ms {
            return Err(SnakeError::InvalidInterval {
                start: self.start_interval_ms,
                min: self.min_interval_ms,
            });
        }
        if self.speedup_every == 0 {
            return Err(SnakeError::ZeroSpeedupThreshold);
        }
        Ok(())
    }
}
