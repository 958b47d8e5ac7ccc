//! Game loop - drives a [`GameSession`] and pushes changes to a [`Renderer`].
//!
//! The loop itself does not know about wall-clock time. The host calls
//! [`GameLoop::handle_input`] for every key edge and [`GameLoop::frame`] once
//! per display refresh.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::rng::PieceSource;
use crate::session::{FrameOutcome, GameSession};
use crate::types::InputEvent;

/// Presentation sink. Called only for things that changed.
pub trait Renderer {
    /// Full locked-cell grid, after any lock or row collapse.
    fn draw_board(&mut self, board: &Board);
    /// The falling piece, or `None` once the game is over.
    fn draw_piece(&mut self, piece: Option<&ActivePiece>);
    fn show_score(&mut self, score: u32);
    fn show_status(&mut self, text: &str);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_board(&mut self, board: &Board) {
        (**self).draw_board(board)
    }

    fn draw_piece(&mut self, piece: Option<&ActivePiece>) {
        (**self).draw_piece(piece)
    }

    fn show_score(&mut self, score: u32) {
        (**self).show_score(score)
    }

    fn show_status(&mut self, text: &str) {
        (**self).show_status(text)
    }
}

pub struct GameLoop<S, R> {
    session: GameSession<S>,
    renderer: R,
}

impl<S: PieceSource, R: Renderer> GameLoop<S, R> {
    /// Take ownership of both halves and draw the initial screen.
    pub fn new(session: GameSession<S>, renderer: R) -> Self {
        let mut game = Self { session, renderer };
        game.present(FrameOutcome {
            board_changed: true,
            piece_changed: true,
            score_changed: true,
            status_changed: true,
            rows_cleared: 0,
        });
        game
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Apply one key edge; it takes effect before the next frame reads held state.
    pub fn handle_input(&mut self, event: InputEvent) -> FrameOutcome {
        let out = self.session.handle(event);
        self.present(out);
        out
    }

    /// Run one frame of simulation.
    pub fn frame(&mut self) -> FrameOutcome {
        let out = self.session.tick();
        self.present(out);
        out
    }

    fn present(&mut self, out: FrameOutcome) {
        if out.board_changed {
            self.renderer.draw_board(self.session.board());
        }
        if out.piece_changed || out.board_changed {
            self.renderer.draw_piece(self.session.piece());
        }
        if out.score_changed {
            self.renderer.show_score(self.session.score());
        }
        if out.status_changed {
            self.renderer.show_status(&self.session.header_text());
        }
    }
}
