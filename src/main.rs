//! Terminal Tetris Trainer runner (default binary).
//!
//! Pumps the game loop at ~60 frames per second. Key edges are applied as they
//! arrive, between frames, so the next frame always reads up-to-date held state.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use tetris_trainer::core::{GameLoop, GameSession, RandomPieces};
use tetris_trainer::input::{should_quit, translate, ReleaseWatchdog};
use tetris_trainer::term::{FrameBuffer, GameView, TerminalRenderer, ViewModel, Viewport};
use tetris_trainer::types::FRAME_MICROS;
use tetris_trainer::{logging, settings};

fn main() -> Result<()> {
    logging::init()?;
    let config = settings::load_config()?;
    let seed = settings::seed()?;
    info!(seed, level = config.level().value(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let session = GameSession::new(&config, RandomPieces::new(seed));
    let view_model = ViewModel::new(session.level().value());
    let result = run(&mut term, GameLoop::new(session, view_model));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameLoop<RandomPieces, ViewModel>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut watchdog = ReleaseWatchdog::for_terminal(term.reports_key_releases());
    info!(
        key_releases = term.reports_key_releases(),
        "terminal input mode"
    );

    let frame = Duration::from_micros(FRAME_MICROS);
    let mut next_frame = Instant::now() + frame;

    loop {
        // Input until the next frame is due.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(
                            score = game.session().score(),
                            lines = game.session().lines(),
                            "quit"
                        );
                        return Ok(());
                    }
                    watchdog.observe(&key, Instant::now());
                    if let Some(input) = translate(key) {
                        game.handle_input(input);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    game.renderer_mut().mark_dirty();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if now < next_frame {
            continue;
        }
        // Never try to catch up on missed frames; a stall just delays the game.
        next_frame = (next_frame + frame).max(now);

        for release in watchdog.expired(now) {
            game.handle_input(release);
        }
        game.frame();

        if game.renderer_mut().take_dirty() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(game.renderer(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
