//! End-to-end: terminal key events -> game loop -> view model -> framebuffer

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tetris_trainer::core::{GameConfig, GameLoop, GameSession, SequencePieces};
use tetris_trainer::input::{translate, ReleaseWatchdog};
use tetris_trainer::term::{FrameBuffer, GameView, ViewModel, Viewport};
use tetris_trainer::types::{InputEvent, Key, PieceKind, FRAME_MICROS};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

fn game() -> GameLoop<SequencePieces, ViewModel> {
    let config = GameConfig::default().with_level(0);
    let session = GameSession::new(&config, SequencePieces::repeat(PieceKind::O));
    GameLoop::new(session, ViewModel::new(0))
}

fn screen_contains(game: &GameLoop<SequencePieces, ViewModel>, needle: &str) -> bool {
    let fb: FrameBuffer = GameView::default().render(game.renderer(), Viewport::new(60, 26));
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

fn feed(game: &mut GameLoop<SequencePieces, ViewModel>, event: KeyEvent) {
    if let Some(input) = translate(event) {
        game.handle_input(input);
    }
}

#[test]
fn test_start_screen_then_frame_counter() {
    let mut game = game();
    assert!(screen_contains(&game, "Welcome to Tetris Trainer!"));

    feed(&mut game, key(KeyCode::Enter, KeyEventKind::Press));
    for _ in 0..7 {
        game.frame();
    }
    assert!(screen_contains(&game, "7"));
    assert!(game.renderer().piece().is_some());

    feed(&mut game, key(KeyCode::Char('p'), KeyEventKind::Press));
    assert!(screen_contains(&game, "Paused"));
}

#[test]
fn test_press_and_release_drive_held_state() {
    let mut game = game();
    feed(&mut game, key(KeyCode::Enter, KeyEventKind::Press));

    feed(&mut game, key(KeyCode::Left, KeyEventKind::Press));
    assert!(game.session().held().left);
    // Host auto-repeat must not move the piece a second time.
    feed(&mut game, key(KeyCode::Left, KeyEventKind::Repeat));
    assert_eq!(game.session().piece().unwrap().col, 2);

    feed(&mut game, key(KeyCode::Left, KeyEventKind::Release));
    assert!(!game.session().held().left);
}

#[test]
fn test_watchdog_releases_keys_without_release_events() {
    let mut game = game();
    feed(&mut game, key(KeyCode::Enter, KeyEventKind::Press));

    let mut watchdog = ReleaseWatchdog::with_timeout(Duration::from_millis(100));
    let t0 = Instant::now();
    let press = key(KeyCode::Right, KeyEventKind::Press);
    watchdog.observe(&press, t0);
    feed(&mut game, press);
    assert!(game.session().held().right);

    assert!(watchdog.expired(t0 + Duration::from_millis(50)).is_empty());
    let releases = watchdog.expired(t0 + Duration::from_millis(200));
    assert_eq!(releases.as_slice(), &[InputEvent::KeyUp(Key::Right)]);
    for release in releases {
        game.handle_input(release);
    }
    assert!(!game.session().held().right);
}

#[test]
fn test_long_first_hold_auto_repeats_on_enhanced_terminal() {
    let mut game = game();
    feed(&mut game, key(KeyCode::Enter, KeyEventKind::Press));

    // Terminal agreed to report releases; no release arrives during the hold.
    let mut watchdog = ReleaseWatchdog::for_terminal(true);
    let t0 = Instant::now();
    let press = key(KeyCode::Left, KeyEventKind::Press);
    watchdog.observe(&press, t0);
    feed(&mut game, press);
    assert_eq!(game.session().piece().unwrap().col, 2);

    let frame = Duration::from_micros(FRAME_MICROS);
    let repeat_every = Duration::from_millis(33);
    let mut next_repeat = t0 + Duration::from_millis(500);
    let mut synthetic_releases = 0;

    for n in 1..=60u32 {
        let now = t0 + frame * n;
        while next_repeat <= now {
            let repeat = key(KeyCode::Left, KeyEventKind::Repeat);
            watchdog.observe(&repeat, next_repeat);
            feed(&mut game, repeat);
            next_repeat += repeat_every;
        }
        for release in watchdog.expired(now) {
            synthetic_releases += 1;
            game.handle_input(release);
        }
        game.frame();
    }

    assert_eq!(synthetic_releases, 0);
    assert!(game.session().held().left);
    // DAS fires on frames 16, 22 and 28; the O then rests against the wall.
    assert_eq!(game.session().piece().unwrap().col, -1);
}

#[test]
fn test_view_model_dirty_only_on_change() {
    let mut game = game();
    assert!(game.renderer_mut().take_dirty());

    // Start screen frames change nothing.
    for _ in 0..10 {
        game.frame();
    }
    assert!(!game.renderer_mut().take_dirty());

    feed(&mut game, key(KeyCode::Char(' '), KeyEventKind::Press));
    assert!(game.renderer_mut().take_dirty());
}
