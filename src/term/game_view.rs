//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::catalog::ShapeCatalog;
use crate::core::SessionSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, SessionState};

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

/// A lightweight terminal view of one session.
pub struct GameView {
    catalog: ShapeCatalog,
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(ShapeCatalog::standard())
    }
}

impl GameView {
    pub fn new(catalog: ShapeCatalog) -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            catalog,
            cell_w: 2,
            cell_h: 1,
        }
    }

    /// Render a session snapshot into a framebuffer.
    pub fn render(&self, snapshot: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (snapshot.width as u16) * self.cell_w;
        let board_px_h = (snapshot.height as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
        };

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells keep the color they were locked with.
        for y in 0..snapshot.height as u16 {
            for x in 0..snapshot.width as u16 {
                match snapshot.board_cells.get(&(x as i8, y as i8)) {
                    Some(&color) => self.draw_board_cell(&mut fb, start_x, start_y, x, y, color),
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, x, y),
                }
            }
        }

        // Falling piece. Cells above the top edge stay hidden.
        if let Some(piece) = snapshot.current {
            if let Some(def) = self.catalog.find(piece.kind) {
                if let Some(mask) = def.rotations.get(piece.rotation) {
                    for (row, cols) in mask.iter().enumerate() {
                        for (col, &filled) in cols.iter().enumerate() {
                            if !filled {
                                continue;
                            }
                            let x = piece.x + col as i8;
                            let y = piece.y + row as i8;
                            if x >= 0
                                && x < snapshot.width as i8
                                && y >= 0
                                && y < snapshot.height as i8
                            {
                                self.draw_board_cell(
                                    &mut fb,
                                    start_x,
                                    start_y,
                                    x as u16,
                                    y as u16,
                                    def.color,
                                );
                            }
                        }
                    }
                }
            }
        }

        // Side panel (lines/next).
        self.draw_side_panel(&mut fb, snapshot, viewport, start_x, start_y, frame_w);

        // Overlay.
        if snapshot.state == SessionState::GameOver {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: Rgb,
    ) {
        let style = CellStyle {
            fg: color,
            bg: Rgb::new(30, 30, 40),
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &SessionSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.lines_cleared), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(kind) = snapshot.next_kind {
            let style = match self.catalog.color_of(kind) {
                Some(color) => CellStyle {
                    fg: color,
                    bg: Rgb::new(0, 0, 0),
                },
                None => value,
            };
            fb.put_str(panel_x, y, kind.as_str(), style);
        } else {
            fb.put_str(panel_x, y, "-", value);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
        };
        fb.put_str(x, mid_y, text, style);
    }
}
