//! Snakes & Ladders.
//!
//! A pure turn engine: it owns the session, consumes dice from an
//! injectable source and reports each move as a sequence of events. It
//! never draws or plays sound; drivers subscribe through [`TurnObserver`]
//! or iterate [`MoveReport::events`] at their own pace.
//!
//! ## Rules
//!
//! - Tokens start off-board at square 0 and race to square 100.
//! - A roll that would pass 100 is forfeited.
//! - Landing on a snake head or ladder bottom redirects once; the
//!   destination is never checked again.
//! - Landing on 100, directly or by ladder, wins and ends the game.
//! - Otherwise the turn passes to the next seat, wrapping around.

mod board;
mod config;
mod engine;
mod error;
mod events;
mod session;

pub use board::{
    Board, BoardBuilder, BoardConfig, BoardError, Cell, Shortcut, ShortcutKind, BOARD_SIDE,
    FINAL_SQUARE,
};
pub use config::LaddersConfig;
pub use engine::{TurnEngine, TurnEngineBuilder};
pub use error::{EngineError, Result};
pub use events::{EventLog, MoveOutcome, MoveReport, TurnEvent, TurnObserver};
pub use session::{Phase, Session, MAX_PLAYERS, MIN_PLAYERS};
