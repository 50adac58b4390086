//! Integration tests for the main game loop: keys in, engine state out

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_blockfall::core::{Engine, GameConfig};
use tui_blockfall::input::{handle_key_event, should_quit, should_restart};
use tui_blockfall::term::{GameView, Viewport};

fn press(engine: &mut Engine, code: KeyCode) {
    if let Some(intent) = handle_key_event(KeyEvent::from(code)) {
        engine.handle_input(intent);
    }
}

#[test]
fn test_game_lifecycle() {
    let mut engine = Engine::new(GameConfig::default(), 12345).unwrap();
    assert!(!engine.game_over());
    assert_eq!(engine.pieces_spawned(), 1);

    // Gravity alone eventually fills the well.
    let mut ticks = 0;
    while !engine.game_over() {
        engine.tick();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }
    assert!(engine.pieces_spawned() > 1);
    assert!(engine.board().filled_count() > 0);
}

#[test]
fn test_keys_drive_the_active_piece() {
    let mut engine = Engine::new(GameConfig::default(), 12345).unwrap();
    let x = engine.active().x;
    let y = engine.active().y;

    press(&mut engine, KeyCode::Left);
    assert_eq!(engine.active().x, x - 1);

    press(&mut engine, KeyCode::Char('l'));
    assert_eq!(engine.active().x, x);

    press(&mut engine, KeyCode::Down);
    assert_eq!(engine.active().y, y + 1);

    // Unmapped keys do nothing.
    let before = engine.active().clone();
    press(&mut engine, KeyCode::Char('x'));
    press(&mut engine, KeyCode::Enter);
    assert_eq!(engine.active(), &before);
}

#[test]
fn test_rotate_key_rotates() {
    let mut engine = Engine::new(GameConfig::default(), 12345).unwrap();
    let mut expected = engine.active().mask.clone();
    // Clear of the ceiling and walls, so every rotation fits.
    press(&mut engine, KeyCode::Down);
    press(&mut engine, KeyCode::Down);

    press(&mut engine, KeyCode::Up);
    expected = expected.rotate_cw();
    assert_eq!(engine.active().mask, expected);
}

#[test]
fn test_quit_and_restart_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));

    assert!(should_restart(KeyEvent::from(KeyCode::Char('r'))));
    assert!(!should_restart(KeyEvent::from(KeyCode::Char('q'))));
}

#[test]
fn test_game_restart() {
    let mut engine = Engine::new(GameConfig::new(6, 6), 7).unwrap();
    while !engine.game_over() {
        engine.tick();
    }

    // The driver restarts by building a fresh engine with the same config.
    let restarted = Engine::new(*engine.config(), 8).unwrap();
    assert!(!restarted.game_over());
    assert_eq!(restarted.score(), 0);
    assert_eq!(restarted.board().filled_count(), 0);
    assert_eq!(restarted.config(), engine.config());
}

#[test]
fn test_render_every_frame_of_a_game() {
    let mut engine = Engine::new(GameConfig::default(), 4242).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let keys = [KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down];
    let mut i = 0;
    while !engine.game_over() && i < 2_000 {
        press(&mut engine, keys[i % keys.len()]);
        engine.tick();
        let fb = view.render(&engine, vp);
        assert_eq!((fb.width(), fb.height()), (60, 24));
        i += 1;
    }
}
