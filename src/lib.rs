//! # r-games
//!
//! Rules engines behind the R-Games portal: Snakes & Ladders, Snake and
//! Tic-Tac-Toe.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: No drawing, audio or DOM access. Each game exposes
//!    state and outcomes; a driver renders them and paces animations.
//!
//! 2. **Explicit state**: Every game is a value owned by its driver. Replaying
//!    means building (or resetting) a value, never clearing globals.
//!
//! 3. **Deterministic by seed**: All randomness flows through `GameRng` or an
//!    injected `DiceSource`, so any game can be reproduced.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG
//! - `ladders`: Snakes & Ladders turn engine
//! - `snake`: Snake grid game
//! - `tictactoe`: Tic-Tac-Toe

pub mod core;
pub mod ladders;
pub mod snake;
pub mod tictactoe;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, DieValue, GameRng, GameRngState, Player, PlayerColor, PlayerId, ScriptedDice,
};

pub use crate::ladders::{
    Board, BoardBuilder, EngineError, MoveOutcome, MoveReport, Phase, Session, TurnEngine,
    TurnEngineBuilder, TurnEvent, TurnObserver,
};

pub use crate::snake::{Direction, SnakeConfig, SnakeGame, TickOutcome};

pub use crate::tictactoe::{Mark, PlaceOutcome, TicTacToe};
