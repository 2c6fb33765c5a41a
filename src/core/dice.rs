//! Six-sided dice and injectable dice sources.
//!
//! The turn engine never calls an RNG directly. It asks a [`DiceSource`]
//! for the next roll, so drivers can plug in a seeded [`GameRng`] for real
//! play or [`ScriptedDice`] to replay a known sequence.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A face value in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Validate a face value.
    ///
    /// ```
    /// use r_games::core::DieValue;
    ///
    /// assert_eq!(DieValue::new(4).map(DieValue::get), Some(4));
    /// assert!(DieValue::new(0).is_none());
    /// assert!(DieValue::new(7).is_none());
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw face value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every face, lowest first.
    pub fn faces() -> impl Iterator<Item = DieValue> {
        (Self::MIN..=Self::MAX).map(DieValue)
    }
}

impl TryFrom<u8> for DieValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieValue::new(value).ok_or_else(|| format!("die value {value} outside 1..=6"))
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of dice rolls consumed by the turn engine.
pub trait DiceSource {
    /// Produce the next roll.
    fn roll(&mut self) -> DieValue;
}

impl DiceSource for GameRng {
    /// Uniform over `1..=6`, independent of earlier rolls.
    fn roll(&mut self) -> DieValue {
        DieValue(self.gen_range(1..7) as u8)
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> DieValue {
        (**self).roll()
    }
}

/// Replays a fixed list of rolls, wrapping around at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    rolls: Vec<DieValue>,
    cursor: usize,
}

impl ScriptedDice {
    /// Build from raw face values.
    ///
    /// Returns `None` if the list is empty or holds a value outside `1..=6`.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Option<Self> {
        let rolls = values
            .into_iter()
            .map(DieValue::new)
            .collect::<Option<Vec<_>>>()?;

        if rolls.is_empty() {
            return None;
        }

        Some(Self { rolls, cursor: 0 })
    }

    /// Rolls not yet consumed in the current pass.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len() - self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DieValue {
        let value = self.rolls[self.cursor];
        self.cursor = (self.cursor + 1) % self.rolls.len();
        value
    }
}
