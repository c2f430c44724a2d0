//! Integration tests for the gravity and lock controller

use blockfall::core::{DropTiming, GameState, Phase, Piece};
use blockfall::types::{Command, GameEvent, PieceKind};

const STEP: f32 = 0.3;

/// Tick at the normal interval until a piece locks.
fn tick_until_placed(state: &mut GameState) -> Vec<GameEvent> {
    for _ in 0..100 {
        let events = state.tick(STEP);
        if !events.is_empty() {
            return events.to_vec();
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_new_game_has_active_piece_at_spawn() {
    let state = GameState::new(12345);
    let active = state.active().unwrap();
    assert_eq!(active, Piece::spawn(active.kind));
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.score(), 0);
    assert!(!state.game_over());
}

#[test]
fn test_o_piece_moved_to_left_wall_locks_on_floor() {
    let mut state = GameState::new(1);
    assert!(state.set_active(Piece::spawn(PieceKind::O)));
    assert_eq!(state.active().unwrap().x, 4);

    for _ in 0..4 {
        assert!(state.move_left());
    }
    assert_eq!(state.active().unwrap().x, 0);
    assert!(!state.move_left());

    let events = tick_until_placed(&mut state);
    assert_eq!(events[0], GameEvent::PiecePlaced { kind: PieceKind::O });

    let board = state.board();
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(board.value(x, y), PieceKind::O.index());
    }
    assert_eq!(board.row_fill(0), 2);
    assert_eq!(board.row_fill(1), 2);
    assert_eq!(state.pieces_placed(), 1);
}

#[test]
fn test_blocked_spawn_ends_the_game() {
    let mut state = GameState::new(1);
    assert!(state.set_active(Piece::spawn(PieceKind::O).at(0, 0)));
    state.set_next(PieceKind::I);
    state.board_mut().fill_row(18, PieceKind::T, Some(0));
    state.board_mut().fill_row(19, PieceKind::T, Some(0));

    let events = state.tick(STEP);
    assert_eq!(
        events.as_slice(),
        &[
            GameEvent::PiecePlaced { kind: PieceKind::O },
            GameEvent::GameOver { score: 0 },
        ]
    );
    assert!(state.game_over());
    assert_eq!(state.phase(), Phase::GameOver);
    // The blocked piece stays visible but has no ghost.
    assert_eq!(state.active().map(|p| p.kind), Some(PieceKind::I));
    assert_eq!(state.ghost(), None);

    let board_before = state.board().clone();
    assert!(state.tick(STEP).is_empty());
    assert!(state.tick(10.0).is_empty());
    assert!(!state.move_left());
    assert!(!state.move_right());
    assert!(!state.rotate());
    assert!(!state.apply(Command::SetFastDrop(true)));
    assert_eq!(state.board(), &board_before);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_double_clear_scores_300() {
    let mut state = GameState::new(9);
    for y in 0..2 {
        state.board_mut().fill_row(y, PieceKind::I, Some(0));
        state.board_mut().set(1, y, None);
    }
    assert!(state.set_active(Piece::spawn(PieceKind::O).at(0, 0)));

    let events = state.tick(STEP);
    assert_eq!(events[0], GameEvent::PiecePlaced { kind: PieceKind::O });
    assert_eq!(
        events[1],
        GameEvent::LinesCleared {
            count: 2,
            points: 300
        }
    );
    assert_eq!(state.score(), 300);
    assert_eq!(state.lines(), 2);
    assert_eq!(state.board().row_fill(0), 0);
    assert!(!state.game_over());
}

#[test]
fn test_tick_below_interval_does_nothing() {
    let mut state = GameState::new(5);
    let before = state.active();
    assert!(state.tick(0.1).is_empty());
    assert!(state.tick(0.1).is_empty());
    assert_eq!(state.active(), before);
    assert!(state.drop_timer() > 0.0);
}

#[test]
fn test_large_delta_runs_one_step() {
    let mut state = GameState::new(5);
    let y = state.active().unwrap().y;
    state.tick(5.0);
    assert_eq!(state.active().unwrap().y, y - 1);
    assert_eq!(state.drop_timer(), 0.0);
}

#[test]
fn test_fast_drop_uses_short_interval_and_resets_on_lock() {
    let mut state = GameState::new(5);
    assert!(state.set_active(Piece::spawn(PieceKind::T)));
    assert!(state.apply(Command::SetFastDrop(true)));
    assert_eq!(state.drop_interval(), DropTiming::default().fast_secs);

    let y = state.active().unwrap().y;
    state.tick(0.02);
    assert_eq!(state.active().unwrap().y, y - 1);

    for _ in 0..100 {
        if !state.tick(0.02).is_empty() {
            break;
        }
    }
    assert_eq!(state.pieces_placed(), 1);
    assert!(!state.fast_drop());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    for i in 0..400 {
        if i % 7 == 0 {
            a.rotate();
            b.rotate();
        }
        assert_eq!(a.tick(STEP), b.tick(STEP));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_restart_starts_a_fresh_episode() {
    let mut state = GameState::new(8);
    tick_until_placed(&mut state);
    assert_eq!(state.pieces_placed(), 1);

    state.restart();
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.pieces_placed(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.board().row_fill(0), 0);
    assert!(state.active().is_some());
}

#[test]
fn test_snapshot_mirrors_state() {
    let state = GameState::new(77);
    let snap = state.snapshot();
    assert_eq!(snap.active, state.active());
    assert_eq!(snap.ghost, state.ghost());
    assert_eq!(snap.next, state.next_piece());
    assert!(snap.playable());
}

#[test]
fn test_phase_is_falling_or_game_over_between_ticks() {
    let mut state = GameState::new(31);
    for _ in 0..2000 {
        state.tick(STEP);
        assert!(matches!(state.phase(), Phase::Falling | Phase::GameOver));
        if state.game_over() {
            break;
        }
    }
}
