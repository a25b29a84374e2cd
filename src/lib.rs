//! Blockfall: a terminal falling-block puzzle game.
//!
//! The crate is split into a pure simulation core and thin terminal layers:
//!
//! - [`core`]: board, shape catalog, and the [`core::GameSession`] state
//!   machine. Deterministic and I/O-free.
//! - [`input`]: crossterm key events mapped to [`types::Command`] values
//! - [`term`]: framebuffer, snapshot-to-frame view, and terminal flushing
//! - [`types`]: shared enums, colors, and board constants
//!
//! # Game Rules
//!
//! This implementation keeps the classic, minimal rule set:
//!
//! - **Uniform randomizer**: every shape kind is equally likely at each spawn
//! - **Single rotation direction**: a blocked rotation reverts to the prior
//!   state in one step
//! - **Instant lock**: a piece whose descent is blocked locks immediately,
//!   full rows clear, and cells above the topmost cleared row shift down
//! - **Game over**: a fresh spawn that collides, or a locked stack touching
//!   the top row, ends the session at once
//!
//! # Example
//!
//! ```
//! use blockfall::core::{GameConfig, GameSession, ShapeCatalog, SimpleRng};
//! use blockfall::types::Command;
//!
//! // Create a session with the classic 10x20 board
//! let mut game = GameSession::new(
//!     GameConfig::default(),
//!     ShapeCatalog::standard(),
//!     SimpleRng::new(12345),
//! )
//! .unwrap();
//!
//! // Apply commands, then advance time
//! game.handle_command(Command::MoveLeft);
//! game.tick(270);
//!
//! assert_eq!(game.lines_cleared(), 0);
//! assert!(game.is_running());
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: one row every 270ms of accumulated elapsed time
//! - **Order**: within a step, pending commands apply before gravity
//!
//! Call [`core::GameSession::step`] every frame with elapsed time and the
//! commands collected since the last frame.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
