use std::collections::HashMap;

use crate::core::piece::Piece;
use crate::types::{PieceKind, Rgb, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub rotation: usize,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            x: piece.x(),
            y: piece.y(),
            rotation: piece.rotation(),
        }
    }
}

/// Read-only view of a session for the renderer.
/// Keep one instance alive and refill it each frame to reuse the map.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub width: u8,
    pub height: u8,
    pub board_cells: HashMap<(i8, i8), Rgb>,
    pub current: Option<PieceSnapshot>,
    pub next_kind: Option<PieceKind>,
    pub lines_cleared: u32,
    pub state: SessionState,
    pub running: bool,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.board_cells.clear();
        self.current = None;
        self.next_kind = None;
        self.lines_cleared = 0;
        self.state = SessionState::Falling;
        self.running = false;
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board_cells: HashMap::new(),
            current: None,
            next_kind: None,
            lines_cleared: 0,
            state: SessionState::Falling,
            running: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_to_the_default_shape() {
        let mut snapshot = SessionSnapshot {
            width: 10,
            height: 20,
            lines_cleared: 3,
            running: true,
            state: SessionState::GameOver,
            ..SessionSnapshot::default()
        };
        snapshot.board_cells.insert((0, 19), Rgb::new(1, 2, 3));

        snapshot.clear();
        assert_eq!(snapshot, SessionSnapshot::default());
        // The map allocation survives for reuse.
        assert!(snapshot.board_cells.capacity() > 0);
    }
}
