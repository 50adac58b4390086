//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: the grid model, collision
//! detection, rotation, line clearing and the spawn/freeze state machine. It
//! has no dependencies on terminals, timers or input devices; a driver calls
//! [`Engine::tick`] and [`Engine::handle_input`] and a renderer reads the
//! accessors.
//!
//! # Module Structure
//!
//! - [`grid`]: generic rectangular grid with clockwise rotation
//! - [`pieces`]: the seven-shape catalog and the rotation transform
//! - [`board`]: fixed-size well, collision testing, freezing, line clearing
//! - [`engine`]: active piece, score and game-over lifecycle
//! - [`scoring`]: the score accumulator (one point per cleared line)
//! - [`rng`]: seedable LCG for uniform shape selection
//! - [`config`]: session parameters, validated at construction
//!
//! # Rules
//!
//! Deliberately minimal: uniform random pieces, clockwise rotation without
//! wall kicks, no hold, no preview, no levels, no lock delay. A piece that
//! cannot fall freezes on the next soft drop or gravity tick.
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Engine, GameConfig};
//! use tui_blockfall_types::Intent;
//!
//! let mut game = Engine::new(GameConfig::default(), 12345).unwrap();
//!
//! game.handle_input(Intent::MoveRight);
//! game.handle_input(Intent::Rotate);
//! game.tick();
//!
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use engine::{ActivePiece, Engine, FreezeEvent, Phase};
pub use error::ConfigError;
pub use grid::{Grid, Mask};
pub use pieces::{all_shapes, rotate, Shape, ShapeCatalog};
pub use rng::SimpleRng;
pub use scoring::Score;
