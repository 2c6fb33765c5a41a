//! Snakes & Ladders turn engine integration tests.
//!
//! These drive the engine through its public API only, the way a browser
//! driver would: roll, resolve, replay events into an observer.

use r_games::core::{DieValue, PlayerId, ScriptedDice};
use r_games::ladders::{
    Board, BoardBuilder, EngineError, EventLog, MoveOutcome, Phase, Session, Shortcut,
    ShortcutKind, TurnEngine, TurnEngineBuilder, TurnEvent, TurnObserver,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn scripted(players: usize, board: Board, rolls: &[u8]) -> TurnEngine<ScriptedDice> {
    TurnEngineBuilder::new()
        .player_count(players)
        .board(board)
        .build_with_dice(ScriptedDice::from_values(rolls.iter().copied()).unwrap())
        .unwrap()
}

/// Walk player 0 to `square` with single-square hops on an empty board,
/// then hand back a session restored onto the engine under test.
fn session_with_position(players: usize, square: u8) -> Session {
    let mut walker = scripted(players, Board::empty(), &[1]);
    while walker.position(PlayerId::new(0)) != Some(square) {
        walker.take_turn().unwrap();
    }
    // Rotate back to player 0 without moving anyone else past it
    while walker.current_player().id != PlayerId::new(0) {
        walker.take_turn().unwrap();
    }
    walker.session().clone()
}

// =============================================================================
// Concrete scenarios
// =============================================================================

/// P1 at 95 rolls 4: lands on 99, no shortcut, turn passes to P2.
#[test]
fn test_scenario_plain_move_to_99() {
    init_tracing();
    let mut engine = scripted(2, Board::classic(), &[4]);
    engine.restore(session_with_position(2, 95)).unwrap();

    let roll = engine.roll_dice().unwrap();
    let report = engine.apply_move(PlayerId::new(0), roll).unwrap();

    assert_eq!(report.outcome, MoveOutcome::Moved);
    assert_eq!(engine.position(PlayerId::new(0)), Some(99));
    assert_eq!(engine.current_player().id, PlayerId::new(1));
    assert_eq!(report.shortcut, None);
}

/// P1 at 0 rolls 3: ladder 3 -> 21.
#[test]
fn test_scenario_ladder_from_start() {
    init_tracing();
    let mut engine = scripted(2, Board::classic(), &[3]);
    let mut log = EventLog::new();

    let report = engine.take_turn().unwrap();
    report.dispatch(&mut log);

    assert_eq!(engine.position(PlayerId::new(0)), Some(21));
    assert_eq!(report.outcome, MoveOutcome::Moved);
    assert_eq!(
        log.events,
        vec![
            TurnEvent::Step { player: PlayerId::new(0), square: 1 },
            TurnEvent::Step { player: PlayerId::new(0), square: 2 },
            TurnEvent::Step { player: PlayerId::new(0), square: 3 },
            TurnEvent::Shortcut {
                player: PlayerId::new(0),
                from: 3,
                to: 21,
                kind: ShortcutKind::Ladder
            },
            TurnEvent::TurnAdvance { next: PlayerId::new(1) },
        ]
    );
}

/// P1 at 94 rolls 6: exact win.
#[test]
fn test_scenario_exact_win() {
    init_tracing();
    let mut engine = scripted(2, Board::classic(), &[6]);
    engine.restore(session_with_position(2, 94)).unwrap();

    let report = engine.take_turn().unwrap();
    assert_eq!(report.outcome, MoveOutcome::Win);
    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.winner(), Some(PlayerId::new(0)));

    // Nothing further is dispatched
    assert!(engine.roll_dice().unwrap_err().is_phase_violation());
    let err = engine
        .apply_move(PlayerId::new(0), DieValue::new(1).unwrap())
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidPhaseTransition { .. }));
}

// =============================================================================
// Observer wiring
// =============================================================================

#[derive(Default)]
struct SoundBoard {
    ticks: usize,
    slides: Vec<Shortcut>,
    turns: Vec<PlayerId>,
    fanfare: Option<PlayerId>,
}

impl TurnObserver for SoundBoard {
    fn on_intermediate_step(&mut self, _player: PlayerId, _square: u8) {
        self.ticks += 1;
    }

    fn on_shortcut(&mut self, _player: PlayerId, shortcut: Shortcut) {
        self.slides.push(shortcut);
    }

    fn on_turn_advance(&mut self, next: PlayerId) {
        self.turns.push(next);
    }

    fn on_win(&mut self, player: PlayerId) {
        self.fanfare = Some(player);
    }
}

#[test]
fn test_observer_sees_full_game() {
    init_tracing();
    let board = BoardBuilder::new().snake(12, 2).ladder(5, 100).build().unwrap();
    // P1: 6 -> 6, P2: 6 -> 6, P1: 6 -> 12 snake -> 2, P2: 5 -> 11, P1: 3 -> 5 ladder -> 100
    let mut engine = scripted(2, board, &[6, 6, 6, 5, 3]);
    let mut sounds = SoundBoard::default();

    while engine.phase() != Phase::Finished {
        engine.take_turn().unwrap().dispatch(&mut sounds);
    }

    assert_eq!(sounds.ticks, 6 + 6 + 6 + 5 + 3);
    assert_eq!(
        sounds.slides.iter().map(|s| (s.from, s.to)).collect::<Vec<_>>(),
        vec![(12, 2), (5, 100)]
    );
    assert_eq!(
        sounds.turns,
        vec![PlayerId::new(1), PlayerId::new(0), PlayerId::new(1), PlayerId::new(0)]
    );
    assert_eq!(sounds.fanfare, Some(PlayerId::new(0)));
    assert_eq!(engine.position(PlayerId::new(1)), Some(11));
}

/// Skipping the animation entirely must not change the outcome.
#[test]
fn test_state_independent_of_animation() {
    let rolls = [2, 5, 6, 1, 4, 3, 6, 6, 2];

    let mut animated = scripted(3, Board::classic(), &rolls);
    let mut skipped = scripted(3, Board::classic(), &rolls);

    for _ in 0..40 {
        if animated.phase() == Phase::Finished {
            break;
        }
        let report = animated.take_turn().unwrap();
        // Abandon the animation after the first event
        let _ = report.events().next();
        let mut log = EventLog::new();
        report.dispatch(&mut log);

        skipped.take_turn().unwrap();
    }

    assert_eq!(animated.session(), skipped.session());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_replay_after_win_starts_fresh() {
    let mut engine = scripted(3, Board::classic(), &[6]);
    engine.restore(session_with_position(3, 94)).unwrap();
    engine.take_turn().unwrap();
    assert_eq!(engine.phase(), Phase::Finished);

    engine.reset();
    assert_eq!(engine.session(), &Session::new(3).unwrap());
    assert!(engine.take_turn().is_ok());
}

#[test]
fn test_snapshot_survives_mid_move() {
    let mut engine = scripted(4, Board::classic(), &[2]);
    engine.roll_dice().unwrap();

    let bytes = engine.session().to_bytes().unwrap();
    let mut resumed = scripted(4, Board::classic(), &[5]);
    resumed.restore(Session::from_bytes(&bytes).unwrap()).unwrap();

    assert_eq!(resumed.phase(), Phase::Animating);
    assert_eq!(resumed.last_roll(), DieValue::new(2));
    let report = resumed.apply_move(PlayerId::new(0), resumed.last_roll().unwrap()).unwrap();
    assert_eq!(report.final_position, 2);
}

#[test]
fn test_seeded_engines_agree() {
    let mut a = TurnEngineBuilder::new().player_count(4).build(2024).unwrap();
    let mut b = TurnEngineBuilder::new().player_count(4).build(2024).unwrap();

    for _ in 0..10_000 {
        if a.phase() == Phase::Finished {
            break;
        }
        assert_eq!(a.take_turn().unwrap(), b.take_turn().unwrap());
    }
    assert_eq!(a.winner(), b.winner());
    assert!(a.winner().is_some());
}
