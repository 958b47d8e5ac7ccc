//! GameView: maps a [`ViewModel`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{COLUMNS, ROWS};
use crate::view_model::ViewModel;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 12;

const CONTROLS: [&str; 5] = ["<- -> move", "v  soft drop", "^  rotate", "p  pause", "q  quit"];

/// Lays out the header, the board, and the score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, vm: &ViewModel, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = COLUMNS as u16 * self.cell_w + 2;
        let frame_h = ROWS as u16 * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // One line above the frame for the header.
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2 + 1;

        let header = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(start_x, frame_w, start_y - 1, vm.status(), header);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                match vm.cell(row, col) {
                    Some(kind) => {
                        let style = CellStyle::new(Rgb::piece(kind), BOARD_BG);
                        self.fill_cell(fb, start_x, start_y, row as u16, col as u16, '█', style);
                    }
                    None => self.fill_cell(fb, start_x, start_y, row as u16, col as u16, '·', empty),
                }
            }
        }

        if let Some((kind, cells)) = vm.piece() {
            let style = CellStyle::new(Rgb::piece(kind), BOARD_BG).bold();
            for (row, col) in cells {
                if row >= 0 && (row as usize) < ROWS && col >= 0 && (col as usize) < COLUMNS {
                    self.fill_cell(fb, start_x, start_y, row as u16, col as u16, '█', style);
                }
            }
        }

        self.draw_side_panel(fb, vm, viewport, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, vm: &ViewModel, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(vm, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, vm: &ViewModel, viewport: Viewport, x: u16, y: u16) {
        if x >= viewport.width || viewport.width - x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &vm.score().to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &vm.level().to_string(), value);

        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_str(x, y + 6 + i as u16, line, hint);
        }
    }
}
