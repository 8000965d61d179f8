//! Integration tests for the session lifecycle through the public API

use crossterm::event::{KeyCode, KeyEvent};

use arcade_tetris::core::{fall_interval_ms, level_for_score, line_clear_points, GameState};
use arcade_tetris::input::handle_key_event;
use arcade_tetris::types::{GameAction, Phase};

/// Hard-drop pieces at spawn until the stack reaches the top.
fn play_until_game_over(state: &mut GameState) {
    for _ in 0..200 {
        if state.game_over() {
            return;
        }
        state.hard_drop();
    }
    panic!("stack never reached the top");
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Falling);
    assert!(state.active().is_some());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.fall_interval_ms(), 1000);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_gravity_moves_piece_one_row_per_interval() {
    let mut state = GameState::new(12345);
    let start = state.active().unwrap();

    assert!(!state.tick(999));
    assert_eq!(state.active().unwrap().y, start.y);

    assert!(state.tick(1));
    assert_eq!(state.active().unwrap().y, start.y + 1);
    assert_eq!(state.active().unwrap().x, start.x);
}

#[test]
fn test_moves_stop_at_walls() {
    let mut state = GameState::new(7);
    for _ in 0..20 {
        state.apply_action(GameAction::MoveLeft);
    }
    let min_x = state
        .active()
        .unwrap()
        .cells()
        .iter()
        .map(|&(x, _)| x)
        .min()
        .unwrap();
    assert_eq!(min_x, 0);

    for _ in 0..20 {
        state.apply_action(GameAction::MoveRight);
    }
    let max_x = state
        .active()
        .unwrap()
        .cells()
        .iter()
        .map(|&(x, _)| x)
        .max()
        .unwrap();
    assert_eq!(max_x, 9);
}

#[test]
fn test_hard_drop_locks_on_floor() {
    let mut state = GameState::new(12345);
    let ghost = state.snapshot().ghost.unwrap();

    state.apply_action(GameAction::HardDrop);

    assert_eq!(state.board().filled_count(), 4);
    for (x, y) in ghost {
        assert!(state.board().is_occupied(x, y));
    }
    assert!(ghost.iter().any(|&(_, y)| y == 19));
    assert_eq!(state.take_last_event().map(|e| e.lines_cleared), Some(0));
}

#[test]
fn test_game_pause() {
    let mut state = GameState::new(12345);
    let before = state.active();

    state.apply_action(GameAction::TogglePause);
    assert!(state.paused());

    assert!(!state.tick(10_000));
    state.apply_action(GameAction::MoveLeft);
    state.apply_action(GameAction::HardDrop);
    assert_eq!(state.active(), before);
    assert_eq!(state.board().filled_count(), 0);

    state.apply_action(GameAction::TogglePause);
    assert_eq!(state.phase(), Phase::Falling);
}

#[test]
fn test_game_over_then_restart() {
    let mut state = GameState::new(12345);
    play_until_game_over(&mut state);

    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.active().is_none());

    // Everything except restart is ignored
    let filled = state.board().filled_count();
    state.apply_action(GameAction::HardDrop);
    state.apply_action(GameAction::TogglePause);
    assert!(!state.tick(10_000));
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.board().filled_count(), filled);

    state.apply_action(GameAction::Restart);
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.board().filled_count(), 0);
    assert!(state.active().is_some());
}

#[test]
fn test_same_seed_same_game() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
    ];

    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    for action in actions {
        a.apply_action(action);
        b.apply_action(action);
        a.tick(16);
        b.tick(16);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_scoring_curve() {
    assert_eq!(line_clear_points(1, 1), 100);
    assert_eq!(line_clear_points(4, 1), 800);
    assert_eq!(line_clear_points(2, 3), 900);
    assert_eq!(line_clear_points(0, 5), 0);

    assert_eq!(level_for_score(4999), 1);
    assert_eq!(level_for_score(5000), 2);

    assert_eq!(fall_interval_ms(1), 1000);
    assert_eq!(fall_interval_ms(5), 600);
    assert_eq!(fall_interval_ms(10), 100);
    assert_eq!(fall_interval_ms(25), 100);
}

#[test]
fn test_keys_drive_the_game() {
    let mut state = GameState::new(12345);
    let start = state.active().unwrap();

    let action = handle_key_event(KeyEvent::from(KeyCode::Down)).unwrap();
    state.apply_action(action);
    assert_eq!(state.active().unwrap().y, start.y + 1);

    let action = handle_key_event(KeyEvent::from(KeyCode::Char(' '))).unwrap();
    state.apply_action(action);
    assert_eq!(state.board().filled_count(), 4);

    let action = handle_key_event(KeyEvent::from(KeyCode::Char('p'))).unwrap();
    state.apply_action(action);
    assert!(state.paused());
}
