//! Snake.
//!
//! Classic grid Snake: the snake advances one tile per tick, grows when it
//! eats, and the run ends on hitting a wall or itself. The pace quickens as
//! the score climbs. Timing belongs to the driver; the game only reports
//! the interval it wants between ticks.

mod config;
mod game;

pub use config::{SnakeConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use game::{Collision, Direction, Point, SnakeError, SnakeGame, SnakePhase, TickOutcome};
