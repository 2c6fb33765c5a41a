//! Move reports and the observer interface drivers subscribe with.
//!
//! ## Event Ordering
//!
//! Every resolved move produces, in order:
//! - one `Step` per square walked (none on an overshoot)
//! - at most one `Shortcut`
//! - exactly one of `TurnAdvance` or `Win`
//!
//! The engine commits the final position before any event is produced, so
//! a driver can pace, skip or abandon the animation without affecting the
//! game.

use serde::{Deserialize, Serialize};

use super::board::{Shortcut, ShortcutKind};
use crate::core::{DieValue, PlayerId};

/// How a move ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Token moved; turn passed on.
    Moved,
    /// Roll would pass the final square; token stayed put, turn passed on.
    Overshoot,
    /// Token reached the final square.
    Win,
}

/// One step of a resolved move, in the order a renderer should show it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnEvent {
    Step {
        player: PlayerId,
        square: u8,
    },
    Shortcut {
        player: PlayerId,
        from: u8,
        to: u8,
        kind: ShortcutKind,
    },
    TurnAdvance {
        next: PlayerId,
    },
    Win {
        player: PlayerId,
    },
}

impl TurnEvent {
    /// Forward this event to the matching observer callback.
    pub fn dispatch<O: TurnObserver + ?Sized>(&self, observer: &mut O) {
        match *self {
            TurnEvent::Step { player, square } => observer.on_intermediate_step(player, square),
            TurnEvent::Shortcut { player, from, to, kind } => {
                observer.on_shortcut(player, Shortcut { kind, from, to });
            }
            TurnEvent::TurnAdvance { next } => observer.on_turn_advance(next),
            TurnEvent::Win { player } => observer.on_win(player),
        }
    }
}

/// Callbacks a renderer or sound driver implements. All default to no-ops.
pub trait TurnObserver {
    /// Token stepped onto `square` while walking out the roll.
    fn on_intermediate_step(&mut self, _player: PlayerId, _square: u8) {}

    /// Token landed on a snake head or ladder bottom and was redirected.
    fn on_shortcut(&mut self, _player: PlayerId, _shortcut: Shortcut) {}

    /// Turn passed to `next`.
    fn on_turn_advance(&mut self, _next: PlayerId) {}

    /// `player` reached the final square.
    fn on_win(&mut self, _player: PlayerId) {}
}

/// Observer that records every event, for tests and replays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<TurnEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Squares visited by `Step` events.
    pub fn steps(&self) -> impl Iterator<Item = u8> + '_ {
        self.events.iter().filter_map(|e| match e {
            TurnEvent::Step { square, .. } => Some(*square),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TurnObserver for EventLog {
    fn on_intermediate_step(&mut self, player: PlayerId, square: u8) {
        self.events.push(TurnEvent::Step { player, square });
    }

    fn on_shortcut(&mut self, player: PlayerId, shortcut: Shortcut) {
        self.events.push(TurnEvent::Shortcut {
            player,
            from: shortcut.from,
            to: shortcut.to,
            kind: shortcut.kind,
        });
    }

    fn on_turn_advance(&mut self, next: PlayerId) {
        self.events.push(TurnEvent::TurnAdvance { next });
    }

    fn on_win(&mut self, player: PlayerId) {
        self.events.push(TurnEvent::Win { player });
    }
}

/// Result of resolving one roll.
///
/// The engine state already reflects `final_position`; the report only
/// describes how the token got there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub player: PlayerId,
    pub roll: DieValue,
    /// Square before the move.
    pub from: u8,
    /// Square reached by walking the roll. Equals `from` on an overshoot.
    pub landed: u8,
    pub shortcut: Option<Shortcut>,
    pub final_position: u8,
    pub outcome: MoveOutcome,
    /// Player to roll next, `None` once the game is won.
    pub next_player: Option<PlayerId>,
}

impl MoveReport {
    /// Squares walked, in order. Empty on an overshoot.
    pub fn steps(&self) -> impl Iterator<Item = u8> {
        let landed = self.landed;
        self.from
            .checked_add(1)
            .into_iter()
            .flat_map(move |first| first..=landed)
    }

    /// Lazily produce this move's events. Each call starts from the top.
    pub fn events(&self) -> impl Iterator<Item = TurnEvent> + '_ {
        let player = self.player;
        let steps = self.steps().map(move |square| TurnEvent::Step { player, square });
        let shortcut = self.shortcut.map(|s| TurnEvent::Shortcut {
            player,
            from: s.from,
            to: s.to,
            kind: s.kind,
        });
        let closing = match (self.outcome, self.next_player) {
            (MoveOutcome::Win, _) => Some(TurnEvent::Win { player }),
            (_, Some(next)) => Some(TurnEvent::TurnAdvance { next }),
            (_, None) => None,
        };

        steps.chain(shortcut).chain(closing)
    }

    /// Feed every event to `observer`.
    pub fn dispatch<O: TurnObserver + ?Sized>(&self, observer: &mut O) {
        for event in self.events() {
            event.dispatch(observer);
        }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == MoveOutcome::Win
    }
}
