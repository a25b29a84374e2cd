//! Board module - the locked-cell map
//!
//! The board holds settled cells in a map keyed by (column, row), each entry
//! carrying the color of the piece that locked there. Rows above the top
//! (row < 0) are legal keys: a piece can lock partly off the top, which is
//! exactly what the loss predicate looks for. The falling piece is never
//! stored here; it stays a transient overlay owned by the session.

use std::collections::HashMap;

use crate::core::piece::Piece;
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// The playfield: fixed dimensions plus the locked-cell map
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    locked: HashMap<(i8, i8), Rgb>,
}

impl Board {
    /// Create an empty board. Dimensions stay fixed for its lifetime.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            locked: HashMap::new(),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether a piece cell may occupy this position.
    ///
    /// Rows above the board are always free so pieces can hang off the top.
    /// Columns outside `[0, width)` and rows past the bottom never are.
    pub fn is_cell_free(&self, x: i8, y: i8) -> bool {
        if y < 0 {
            return true;
        }
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return false;
        }
        !self.locked.contains_key(&(x, y))
    }

    /// The sole collision predicate: every projected cell must be free
    pub fn validate(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .iter()
            .all(|&(x, y)| self.is_cell_free(x, y))
    }

    /// Merge a piece into the map with its color.
    ///
    /// Every projected cell is inserted, including cells above the top.
    /// Row clearing is a separate step.
    pub fn lock(&mut self, piece: &Piece) {
        let color = piece.color();
        for (x, y) in piece.occupied_cells() {
            self.locked.insert((x, y), color);
        }
    }

    /// Whether every column of a visible row is occupied
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= self.height as i8 {
            return false;
        }
        (0..self.width as i8).all(|x| self.locked.contains_key(&(x, y)))
    }

    /// Remove every full row and let the stack settle.
    ///
    /// Scans bottom to top, removing each full row and tracking the topmost
    /// one. Afterwards only cells strictly above the topmost cleared row
    /// move: they shift down by the number of rows cleared. Cells at or
    /// below the topmost cleared row stay put. Returns the cleared count;
    /// with no full rows the map is left untouched.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut topmost_cleared: Option<i8> = None;

        for y in (0..self.height as i8).rev() {
            if self.is_row_full(y) {
                cleared += 1;
                topmost_cleared = Some(y);
                for x in 0..self.width as i8 {
                    self.locked.remove(&(x, y));
                }
            }
        }

        if let Some(top) = topmost_cleared {
            let shift = cleared as i8;
            let moved: Vec<((i8, i8), Rgb)> = self
                .locked
                .iter()
                .filter(|&(&(_, y), _)| y < top)
                .map(|(&key, &color)| (key, color))
                .collect();
            for (key, _) in &moved {
                self.locked.remove(key);
            }
            // Shifted cells overwrite any survivor they land on.
            for ((x, y), color) in moved {
                self.locked.insert((x, y + shift), color);
            }
        }

        cleared
    }

    /// Loss predicate: the stack has reached the spawn buffer (row < 1)
    pub fn stack_reached_top(&self) -> bool {
        self.locked.keys().any(|&(_, y)| y < 1)
    }

    /// Color of a locked cell, if present
    pub fn cell(&self, x: i8, y: i8) -> Option<Rgb> {
        self.locked.get(&(x, y)).copied()
    }

    /// Insert a single locked cell directly
    pub fn set(&mut self, x: i8, y: i8, color: Rgb) {
        self.locked.insert((x, y), color);
    }

    /// The locked-cell map
    pub fn cells(&self) -> &HashMap<(i8, i8), Rgb> {
        &self.locked
    }

    pub fn occupied_count(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::definition_of;
    use crate::types::PieceKind;

    const GRAY: Rgb = Rgb::new(128, 128, 128);
    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..board.width() as i8 {
            board.set(x, y, GRAY);
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(10, 20);
        assert!(board.is_empty());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn cells_above_board_are_free_even_outside_columns() {
        let board = Board::new(10, 20);
        assert!(board.is_cell_free(3, -1));
        // Above the top the column is not checked.
        assert!(board.is_cell_free(-5, -2));
        assert!(board.is_cell_free(12, -1));
    }

    #[test]
    fn out_of_bounds_cells_are_never_free() {
        let board = Board::new(10, 20);
        assert!(!board.is_cell_free(-1, 0));
        assert!(!board.is_cell_free(10, 0));
        assert!(!board.is_cell_free(0, 20));
        assert!(!board.is_cell_free(4, 25));
    }

    #[test]
    fn occupied_cells_are_not_free() {
        let mut board = Board::new(10, 20);
        board.set(4, 10, GRAY);
        assert!(!board.is_cell_free(4, 10));
        assert!(board.is_cell_free(4, 11));
    }

    #[test]
    fn validate_accepts_free_cells_and_rejects_occupied() {
        let mut board = Board::new(10, 20);
        let piece = Piece::new(definition_of(PieceKind::O), 0, 0);
        assert!(board.validate(&piece));

        // O projects onto (1,2) among others.
        board.set(1, 2, GRAY);
        assert!(!board.validate(&piece));
    }

    #[test]
    fn validate_allows_piece_hanging_off_the_top() {
        let board = Board::new(10, 20);
        let mut piece = Piece::new(definition_of(PieceKind::O), 0, 0);
        piece.translate(0, -3);
        assert!(piece.occupied_cells().iter().any(|&(_, y)| y < 0));
        assert!(board.validate(&piece));
    }

    #[test]
    fn lock_inserts_piece_cells_with_its_color() {
        let mut board = Board::new(10, 20);
        let piece = Piece::new(definition_of(PieceKind::O), 0, 0);
        board.lock(&piece);

        assert_eq!(board.occupied_count(), 4);
        for (x, y) in piece.occupied_cells() {
            assert_eq!(board.cell(x, y), Some(piece.color()));
        }
    }

    #[test]
    fn lock_keeps_cells_above_the_top() {
        let mut board = Board::new(10, 20);
        let mut piece = Piece::new(definition_of(PieceKind::O), 0, 0);
        piece.translate(0, -3);
        board.lock(&piece);

        assert!(board.cells().keys().any(|&(_, y)| y < 0));
        assert!(board.stack_reached_top());
    }

    #[test]
    fn clear_returns_zero_and_leaves_map_unchanged_without_full_rows() {
        let mut board = Board::new(10, 20);
        board.set(0, 19, GRAY);
        board.set(5, 10, RED);
        board.set(9, 0, GREEN);
        let before = board.cells().clone();

        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.cells(), &before);
    }

    #[test]
    fn clearing_bottom_row_shifts_everything_above() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19);
        board.set(0, 18, RED);
        board.set(5, 0, GREEN);

        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.cell(0, 19), Some(RED));
        assert_eq!(board.cell(5, 1), Some(GREEN));
    }

    #[test]
    fn compaction_only_moves_rows_above_the_topmost_cleared() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        board.set(0, 18, RED);
        board.set(3, 16, GREEN);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.occupied_count(), 2);
        // The survivor between the cleared rows does not move.
        assert_eq!(board.cell(0, 18), Some(RED));
        // The cell above the topmost cleared row falls by two.
        assert_eq!(board.cell(3, 18), Some(GREEN));
        assert_eq!(board.cell(3, 16), None);
    }

    #[test]
    fn shifted_cells_overwrite_survivors_they_land_on() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        board.set(3, 18, RED);
        board.set(3, 16, GREEN);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.occupied_count(), 1);
        assert_eq!(board.cell(3, 18), Some(GREEN));
    }

    #[test]
    fn contiguous_double_clear_drops_stack_by_two() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19);
        fill_row(&mut board, 18);
        board.set(2, 10, RED);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.occupied_count(), 1);
        assert_eq!(board.cell(2, 12), Some(RED));
    }

    #[test]
    fn full_column_is_terminal_but_clears_nothing() {
        let mut board = Board::new(10, 20);
        for y in 0..20 {
            board.set(4, y, GRAY);
        }

        assert!(board.stack_reached_top());
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.occupied_count(), 20);
    }

    #[test]
    fn row_full_detection() {
        let mut board = Board::new(10, 20);
        fill_row(&mut board, 19);
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));

        board.set(0, 18, GRAY);
        assert!(!board.is_row_full(18));

        // Rows outside the visible board are never full.
        assert!(!board.is_row_full(-1));
        assert!(!board.is_row_full(20));
    }
}
