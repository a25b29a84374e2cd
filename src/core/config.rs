//! Session construction parameters
//!
//! Board dimensions, fall threshold, and spawn placement are overridable so
//! tests can run on reduced grids. Validation happens once, when a session
//! is constructed; steady-state play has no fallible paths.

use thiserror::Error;

use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, SPAWN_COL_OFFSET};

/// Rejected construction parameters
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be within 1..=127, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },
    #[error("shape catalog has no shapes")]
    EmptyCatalog,
    #[error("shape {kind:?} has no rotation states")]
    NoRotations { kind: PieceKind },
}

/// Tunable session parameters with classic defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u8,
    pub board_height: u8,
    /// Gravity threshold in milliseconds
    pub fall_interval_ms: u32,
    /// Spawn column of the mask origin, relative to the board's horizontal
    /// midpoint
    pub spawn_col_offset: i8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            fall_interval_ms: FALL_INTERVAL_MS,
            spawn_col_offset: SPAWN_COL_OFFSET,
        }
    }
}

impl GameConfig {
    /// Piece coordinates are i8, so each axis must fit in 1..=127
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = i8::MAX as u8;
        if self.board_width == 0
            || self.board_height == 0
            || self.board_width > max
            || self.board_height > max
        {
            return Err(ConfigError::InvalidDimensions {
                width: self.board_width,
                height: self.board_height,
            });
        }
        Ok(())
    }

    /// Column of the mask origin for a fresh spawn
    pub fn spawn_x(&self) -> i8 {
        (self.board_width / 2) as i8 + self.spawn_col_offset
    }
}
