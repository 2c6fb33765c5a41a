//! Shared building blocks: players, dice and RNG.
//!
//! These types are game-agnostic; each game module builds on them.

pub mod player;
pub mod rng;
pub mod dice;

pub use player::{Player, PlayerColor, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use dice::{DiceSource, DieValue, ScriptedDice};
