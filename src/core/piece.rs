//! Live piece instance - position, rotation index, mask projection
//!
//! A piece has no board awareness. It exposes raw mutators (translate, a
//! rotation step and its inverse) so the session can speculatively apply a
//! mutation, validate the result against the board, and roll it back on
//! rejection.

use arrayvec::ArrayVec;

use crate::core::catalog::{ShapeDefinition, MASK_AREA};
use crate::types::{PieceKind, Rgb};

/// A falling piece: catalog shape plus board position and rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: &'static ShapeDefinition,
    /// Board column of the mask origin
    x: i8,
    /// Board row of the mask origin, may be negative before the piece settles
    y: i8,
    rotation: usize,
}

impl Piece {
    /// Create a piece at the given mask origin, in rotation state 0.
    /// The shape must have at least one rotation state.
    pub fn new(shape: &'static ShapeDefinition, x: i8, y: i8) -> Self {
        debug_assert!(!shape.rotations.is_empty());
        Self {
            shape,
            x,
            y,
            rotation: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn color(&self) -> Rgb {
        self.shape.color
    }

    pub fn rotation_count(&self) -> usize {
        self.shape.rotations.len()
    }

    /// Project the current rotation mask to absolute board cells
    pub fn occupied_cells(&self) -> ArrayVec<(i8, i8), MASK_AREA> {
        let mut cells = ArrayVec::new();
        let mask = &self.shape.rotations[self.rotation];
        for (row, cols) in mask.iter().enumerate() {
            for (col, &filled) in cols.iter().enumerate() {
                if filled {
                    cells.push((self.x + col as i8, self.y + row as i8));
                }
            }
        }
        cells
    }

    /// Move the mask origin by (dx, dy)
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Advance to the next rotation state, wrapping at this kind's count
    pub fn rotate_next(&mut self) {
        self.rotation = (self.rotation + 1) % self.rotation_count();
    }

    /// Step back to the previous rotation state, the exact inverse of
    /// `rotate_next`
    pub fn rotate_back(&mut self) {
        let count = self.rotation_count();
        self.rotation = (self.rotation + count - 1) % count;
    }

    /// Jump to a rotation state; indexes wrap rather than going out of range
    pub fn set_rotation(&mut self, index: usize) {
        self.rotation = index % self.rotation_count();
    }
}
