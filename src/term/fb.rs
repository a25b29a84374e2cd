//! In-memory frame of styled glyphs.
//!
//! The game view draws into a [`FrameBuffer`]; the terminal renderer flushes
//! it row by row. Out-of-range writes are silently dropped, so drawing code
//! never has to clamp against the viewport itself.

use crate::types::Rgb;

/// Foreground/background pair for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// One terminal cell: a glyph plus its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Fixed-size grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// One full row of cells; rows past the bottom are empty.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    /// Reset every cell to the given fill.
    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell { ch, style });
        }
    }

    /// Fill a rectangle with one glyph, clipped to the frame.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let cell = Cell { ch, style };
        for cy in y..y.saturating_add(h).min(self.height) {
            let start = cy as usize * self.width as usize;
            let x0 = x.min(self.width) as usize;
            let x1 = x.saturating_add(w).min(self.width) as usize;
            self.cells[start + x0..start + x1].fill(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_the_frame_are_dropped() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.put_char(4, 0, 'x', CellStyle::default());
        fb.put_char(0, 3, 'x', CellStyle::default());
        assert!(fb.row(0).iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn put_str_clips_at_the_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abcd", CellStyle::default());
        let text: String = fb.row(0).iter().map(|c| c.ch).collect();
        assert_eq!(text, "  ab");
    }

    #[test]
    fn fill_rect_clips_to_the_frame() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_rect(2, 2, 5, 5, '#', CellStyle::default());
        assert_eq!(fb.get(2, 2).unwrap().ch, '#');
        assert_eq!(fb.get(3, 3).unwrap().ch, '#');
        assert_eq!(fb.get(1, 2).unwrap().ch, ' ');
        assert_eq!(fb.row(1).iter().filter(|c| c.ch == '#').count(), 0);
    }

    #[test]
    fn rows_past_the_bottom_are_empty() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.row(1).len(), 3);
        assert!(fb.row(2).is_empty());
    }
}
