//! Session state for one Snakes & Ladders game.
//!
//! A `Session` holds everything that changes during play: the seated
//! players, whose turn it is, the state-machine phase and the roll being
//! resolved. It is a plain value owned by the engine; replaying a game
//! builds a fresh one rather than carrying anything over.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::FINAL_SQUARE;
use super::error::{EngineError, Result};
use crate::core::{DieValue, Player, PlayerId};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Turn engine state-machine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to roll.
    #[default]
    AwaitingRoll,
    /// A roll has been made and its move is being resolved.
    Animating,
    /// Someone reached the final square. Terminal until reset.
    Finished,
}

/// Mutable state of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    players: SmallVec<[Player; MAX_PLAYERS]>,
    current: usize,
    phase: Phase,
    pending_roll: Option<DieValue>,
    winner: Option<PlayerId>,
    /// Moves resolved so far, plus one.
    turn_number: u32,
}

impl Session {
    /// Seat `player_count` players with default names and colours.
    pub fn new(player_count: usize) -> Result<Self> {
        check_player_count(player_count)?;
        Self::with_players(PlayerId::all(player_count).map(Player::new))
    }

    /// Seat the given players. Ids are reassigned to seat order and every
    /// token starts off-board.
    ///
    /// At most `MAX_PLAYERS + 1` players are taken from the iterator, so an
    /// oversized table reports a count of `MAX_PLAYERS + 1`.
    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Result<Self> {
        let mut players: SmallVec<[Player; MAX_PLAYERS]> =
            players.into_iter().take(MAX_PLAYERS + 1).collect();
        check_player_count(players.len())?;

        for (seat, player) in players.iter_mut().enumerate() {
            player.id = PlayerId::new(seat as u8);
            player.position = 0;
        }

        Ok(Self {
            players,
            current: 0,
            phase: Phase::AwaitingRoll,
            pending_roll: None,
            winner: None,
            turn_number: 1,
        })
    }

    /// Return every token to the start and hand the turn to the first seat.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.position = 0;
        }
        self.current = 0;
        self.phase = Phase::AwaitingRoll;
        self.pending_roll = None;
        self.winner = None;
        self.turn_number = 1;
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn pending_roll(&self) -> Option<DieValue> {
        self.pending_roll
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === Engine-side mutation ===

    pub(crate) fn begin_move(&mut self, roll: DieValue) {
        self.pending_roll = Some(roll);
        self.phase = Phase::Animating;
    }

    pub(crate) fn set_position(&mut self, id: PlayerId, square: u8) {
        debug_assert!(square <= FINAL_SQUARE);
        self.players[id.index()].position = square;
    }

    /// Close out a non-winning move and pass the turn. Returns the next player.
    pub(crate) fn advance_turn(&mut self) -> PlayerId {
        self.current = (self.current + 1) % self.players.len();
        self.phase = Phase::AwaitingRoll;
        self.pending_roll = None;
        self.turn_number += 1;
        self.current_player().id
    }

    pub(crate) fn finish(&mut self, winner: PlayerId) {
        self.winner = Some(winner);
        self.phase = Phase::Finished;
        self.pending_roll = None;
        self.turn_number += 1;
    }

    // === Snapshots ===

    /// Encode the session for suspend/resume.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a session produced by [`Session::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let session: Session = bincode::deserialize(bytes)?;
        session.validate()?;
        Ok(session)
    }

    /// Check the invariants a decoded session must satisfy.
    pub fn validate(&self) -> Result<()> {
        let count = self.players.len();
        check_player_count(count)?;
        if self.current >= count {
            return Err(EngineError::CorruptSnapshot {
                reason: "current player index out of range",
            });
        }
        if self.players.iter().any(|p| p.position > FINAL_SQUARE) {
            return Err(EngineError::CorruptSnapshot {
                reason: "token beyond the final square",
            });
        }
        // Reaching the final square ends the game, so only the winner sits there
        let mut on_final = self.players.iter().filter(|p| p.position == FINAL_SQUARE);
        if let Some(first) = on_final.next() {
            if on_final.next().is_some() {
                return Err(EngineError::CorruptSnapshot {
                    reason: "more than one token on the final square",
                });
            }
            if self.phase != Phase::Finished || self.winner != Some(first.id) {
                return Err(EngineError::CorruptSnapshot {
                    reason: "token on the final square without a win",
                });
            }
        }
        if self
            .players
            .iter()
            .enumerate()
            .any(|(seat, p)| p.id.index() != seat)
        {
            return Err(EngineError::CorruptSnapshot {
                reason: "player ids out of seat order",
            });
        }

        let finished = self.phase == Phase::Finished;
        match self.winner {
            Some(id) if !finished || self.player(id).map(|p| p.position) != Some(FINAL_SQUARE) => {
                Err(EngineError::CorruptSnapshot {
                    reason: "winner recorded without a finished game",
                })
            }
            None if finished => Err(EngineError::CorruptSnapshot {
                reason: "finished game without a winner",
            }),
            _ if self.phase == Phase::Animating && self.pending_roll.is_none() => {
                Err(EngineError::CorruptSnapshot {
                    reason: "move in progress without a roll",
                })
            }
            _ => Ok(()),
        }
    }
}

/// Reject tables outside `MIN_PLAYERS..=MAX_PLAYERS`.
pub(crate) fn check_player_count(count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(EngineError::InvalidPlayerCount { count })
    }
}
