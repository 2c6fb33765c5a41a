//! The Snakes & Ladders turn engine.
//!
//! ## Turn Cycle
//!
//! 1. `roll_dice` (AwaitingRoll → Animating)
//! 2. `apply_move` walks the roll, applies at most one shortcut, then either
//!    finishes the game or passes the turn (Animating → AwaitingRoll or
//!    Finished)
//!
//! `reset` returns to a fresh game from any phase.
//!
//! ## Example
//!
//! ```
//! use r_games::core::ScriptedDice;
//! use r_games::ladders::{MoveOutcome, Phase, TurnEngineBuilder};
//!
//! let dice = ScriptedDice::from_values([3]).unwrap();
//! let mut engine = TurnEngineBuilder::new().player_count(2).build_with_dice(dice).unwrap();
//!
//! let report = engine.take_turn().unwrap();
//! assert_eq!(report.landed, 3);
//! assert_eq!(report.final_position, 21); // ladder 3 -> 21
//! assert_eq!(report.outcome, MoveOutcome::Moved);
//! assert_eq!(engine.phase(), Phase::AwaitingRoll);
//! ```

use tracing::{debug, info};

use super::board::{Board, FINAL_SQUARE};
use super::config::LaddersConfig;
use super::error::{EngineError, Result};
use super::events::{MoveOutcome, MoveReport};
use super::session::{check_player_count, Phase, Session};
use crate::core::{DiceSource, DieValue, GameRng, Player, PlayerId};

/// Drives one Snakes & Ladders session.
///
/// Generic over the dice source so tests and replays can script rolls.
#[derive(Clone, Debug)]
pub struct TurnEngine<D = GameRng> {
    board: Board,
    session: Session,
    dice: D,
}

impl TurnEngine<GameRng> {
    /// Build an engine from a config, rolling with a seeded RNG.
    pub fn from_config(config: &LaddersConfig) -> Result<Self> {
        TurnEngineBuilder::new()
            .player_count(config.player_count)
            .player_names(config.player_names.iter().cloned())
            .board(config.board.build()?)
            .build(config.seed)
    }
}

impl<D: DiceSource> TurnEngine<D> {
    /// Create an engine for an already-seated session.
    pub fn new(board: Board, session: Session, dice: D) -> Self {
        Self {
            board,
            session,
            dice,
        }
    }

    /// Roll for the current player.
    ///
    /// Only valid while awaiting a roll; otherwise the session is left
    /// unchanged and `InvalidPhaseTransition` is returned.
    pub fn roll_dice(&mut self) -> Result<DieValue> {
        self.require_phase("roll_dice", Phase::AwaitingRoll)?;

        let roll = self.dice.roll();
        self.session.begin_move(roll);

        debug!(
            player = %self.session.current_player().id,
            roll = roll.get(),
            "dice rolled"
        );
        Ok(roll)
    }

    /// Resolve `steps` for `player`, who must be the current player.
    /// `steps` must be the value returned by the preceding `roll_dice`.
    ///
    /// Position, phase and turn order are committed before returning; the
    /// report only describes the move for animation.
    pub fn apply_move(&mut self, player: PlayerId, steps: DieValue) -> Result<MoveReport> {
        self.require_phase("apply_move", Phase::Animating)?;

        let expected = self.session.current_player().id;
        if player != expected {
            return Err(EngineError::NotPlayersTurn {
                expected,
                provided: player,
            });
        }
        let rolled = self.session.pending_roll();
        if rolled != Some(steps) {
            return Err(EngineError::RollMismatch {
                rolled,
                provided: steps,
            });
        }

        let from = self.session.current_player().position;
        let target = from + steps.get();

        if target > FINAL_SQUARE {
            let next = self.session.advance_turn();
            debug!(%player, from, roll = steps.get(), %next, "overshoot, turn forfeited");
            return Ok(MoveReport {
                player,
                roll: steps,
                from,
                landed: from,
                shortcut: None,
                final_position: from,
                outcome: MoveOutcome::Overshoot,
                next_player: Some(next),
            });
        }

        // Destinations are never looked up again
        let shortcut = self.board.lookup(target);
        let final_position = shortcut.map_or(target, |s| s.to);
        self.session.set_position(player, final_position);

        if let Some(s) = shortcut {
            debug!(%player, from = s.from, to = s.to, kind = ?s.kind, "shortcut taken");
        }

        if final_position == FINAL_SQUARE {
            self.session.finish(player);
            info!(%player, turn = self.session.turn_number(), "player reached the final square");
            return Ok(MoveReport {
                player,
                roll: steps,
                from,
                landed: target,
                shortcut,
                final_position,
                outcome: MoveOutcome::Win,
                next_player: None,
            });
        }

        let next = self.session.advance_turn();
        debug!(%player, from, to = final_position, %next, "move resolved");

        Ok(MoveReport {
            player,
            roll: steps,
            from,
            landed: target,
            shortcut,
            final_position,
            outcome: MoveOutcome::Moved,
            next_player: Some(next),
        })
    }

    /// Roll and resolve the move for the current player.
    pub fn take_turn(&mut self) -> Result<MoveReport> {
        let roll = self.roll_dice()?;
        let player = self.session.current_player().id;
        self.apply_move(player, roll)
    }

    /// Start over with the same players. Always permitted.
    pub fn reset(&mut self) {
        self.session.reset();
        debug!(players = self.session.player_count(), "session reset");
    }

    /// Replace the session, e.g. with one decoded from a snapshot.
    pub fn restore(&mut self, session: Session) -> Result<()> {
        session.validate()?;
        self.session = session;
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.session.current_player()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.session.player(id)
    }

    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<u8> {
        self.player(id).map(|p| p.position)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.session.players()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.session.winner()
    }

    /// Roll awaiting resolution, if a move is in progress.
    #[must_use]
    pub fn last_roll(&self) -> Option<DieValue> {
        self.session.pending_roll()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The dice source. Suspending a seeded game pairs
    /// [`GameRng::state`] with the session snapshot; resuming swaps in
    /// [`GameRng::from_state`] here.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    fn require_phase(&self, operation: &'static str, required: Phase) -> Result<()> {
        let phase = self.session.phase();
        if phase == required {
            Ok(())
        } else {
            debug!(operation, ?phase, "rejected call in wrong phase");
            Err(EngineError::InvalidPhaseTransition { operation, phase })
        }
    }
}

/// Builder for a [`TurnEngine`].
#[derive(Clone, Debug)]
pub struct TurnEngineBuilder {
    player_count: usize,
    names: Vec<String>,
    board: Board,
}

impl Default for TurnEngineBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            names: Vec::new(),
            board: Board::classic(),
        }
    }
}

impl TurnEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats at the table. Validated in `build`.
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Display names in seat order. Missing names fall back to "Player N".
    pub fn player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Build with a seeded RNG for dice.
    pub fn build(self, seed: u64) -> Result<TurnEngine<GameRng>> {
        self.build_with_dice(GameRng::new(seed))
    }

    /// Build with any dice source.
    pub fn build_with_dice<D: DiceSource>(self, dice: D) -> Result<TurnEngine<D>> {
        check_player_count(self.player_count)?;

        let players = PlayerId::all(self.player_count).map(|id| {
            let player = Player::new(id);
            match self.names.get(id.index()) {
                Some(name) => player.with_name(name.clone()),
                None => player,
            }
        });
        let session = Session::with_players(players)?;

        debug!(players = session.player_count(), "session created");
        Ok(TurnEngine::new(self.board, session, dice))
    }
}
