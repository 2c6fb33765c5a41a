//! Errors surfaced by the turn engine.
//!
//! Phase violations are recoverable: the engine rejects the call and leaves
//! the session untouched, so drivers can ignore them when a stray click
//! arrives mid-animation.

use thiserror::Error;

use super::board::BoardError;
use super::session::Phase;
use crate::core::{DieValue, PlayerId};

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{operation} is not allowed while {phase:?}")]
    InvalidPhaseTransition {
        operation: &'static str,
        phase: Phase,
    },

    #[error("{provided} tried to move but it is {expected}'s turn")]
    NotPlayersTurn {
        expected: PlayerId,
        provided: PlayerId,
    },

    #[error("move of {provided} does not match the pending roll {rolled:?}")]
    RollMismatch {
        rolled: Option<DieValue>,
        provided: DieValue,
    },

    #[error("a table seats 2 to 4 players, got {count}")]
    InvalidPlayerCount { count: usize },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed to encode or decode session snapshot")]
    Snapshot(#[from] bincode::Error),

    #[error("session snapshot is inconsistent: {reason}")]
    CorruptSnapshot { reason: &'static str },
}

impl EngineError {
    /// Whether this is a rejected phase transition that left state unchanged.
    #[must_use]
    pub fn is_phase_violation(&self) -> bool {
        matches!(self, EngineError::InvalidPhaseTransition { .. })
    }
}
