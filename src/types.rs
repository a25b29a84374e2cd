//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const FALL_INTERVAL_MS: u32 = 270;

/// Default spawn placement: the mask origin starts this far left of the
/// board's horizontal midpoint, on row 0
pub const SPAWN_COL_OFFSET: i8 = -2;
pub const SPAWN_ROW: i8 = 0;

/// Piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    I,
    O,
    T,
    J,
    L,
}

impl PieceKind {
    /// Display letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// All kinds, in catalog order
    pub const fn all() -> [PieceKind; 7] {
        [
            PieceKind::S,
            PieceKind::Z,
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::J,
            PieceKind::L,
        ]
    }
}

/// Discrete player commands consumed by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}

/// Observable session states
///
/// Locking and row clearing resolve within a single tick, so only the
/// steady states are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Falling,
    GameOver,
}

/// 24-bit RGB color, used for both locked cells and terminal styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
