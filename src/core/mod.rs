//! Core module - pure simulation logic with no terminal dependencies
//!
//! Everything under here is deterministic: randomness comes in through a
//! [`rng::ShapeSource`] and time comes in as per-tick elapsed milliseconds.
//! The terminal layer only reads snapshots.

pub mod board;
pub mod catalog;
pub mod config;
pub mod piece;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use catalog::{definition_of, Mask, ShapeCatalog, ShapeDefinition, STANDARD_SHAPES};
pub use config::{ConfigError, GameConfig};
pub use piece::Piece;
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng};
pub use session::GameSession;
pub use snapshot::{PieceSnapshot, SessionSnapshot};
