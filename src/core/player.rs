//! Player identification and per-seat data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Indices are 0-based internally but displayed
//! 1-based, matching the labels shown on the portal ("Player 1").
//!
//! ## Player
//!
//! A seat at a Snakes & Ladders table: name, token colour and board square.

use serde::{Deserialize, Serialize};

/// Seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` seats.
    ///
    /// ```
    /// use r_games::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", u16::from(self.0) + 1)
    }
}

/// Token colour palette, in seat order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Coral,
    Teal,
    Sky,
    Gold,
}

impl PlayerColor {
    /// All colours in seat order.
    pub const PALETTE: [PlayerColor; 4] = [
        PlayerColor::Coral,
        PlayerColor::Teal,
        PlayerColor::Sky,
        PlayerColor::Gold,
    ];

    /// Colour assigned to a seat. Wraps past the fourth seat.
    #[must_use]
    pub const fn for_seat(seat: usize) -> Self {
        Self::PALETTE[seat % Self::PALETTE.len()]
    }

    /// CSS hex string for renderers.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            PlayerColor::Coral => "#ff6b6b",
            PlayerColor::Teal => "#4ecdc4",
            PlayerColor::Sky => "#45b7d1",
            PlayerColor::Gold => "#f9ca24",
        }
    }
}

/// A player seated at a Snakes & Ladders table.
///
/// `position` is the board square in `0..=100`; 0 means the token has not
/// entered the board yet. Only the turn engine mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub position: u8,
}

impl Player {
    /// Create a player off-board with the default name and seat colour.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: id.to_string(),
            color: PlayerColor::for_seat(id.index()),
            position: 0,
        }
    }

    /// Override the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the token is still waiting off-board.
    #[must_use]
    pub fn is_off_board(&self) -> bool {
        self.position == 0
    }
}
