//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule and state transition
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Fixed arrays for the grid, pieces, and cleared rows
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 playfield with collision queries and line clearing
//! - [`game_state`]: Active piece, placement validation, session state machine
//! - [`pieces`]: Tetromino catalog and clockwise matrix rotation
//! - [`rng`]: Seeded uniform and 7-bag piece generation
//! - [`scoring`]: Line-clear points, level curve, fall speed
//! - [`snapshot`]: Read-only per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Rotation**: clockwise only, in place; no wall kicks
//! - **Gravity**: one row per fall interval (1000ms at level 1, -100ms per level, 100ms floor)
//! - **Soft drop**: one row down; locks immediately if the piece is resting
//! - **Hard drop**: straight to the lowest valid row, then lock
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 rows, times the level
//! - **Level**: `score / 5000 + 1`
//! - **Game over**: the next piece overlaps locked cells at its spawn position
//!
//! # Example
//!
//! ```
//! use arcade_tetris_core::GameState;
//! use arcade_tetris_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Falling);
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds; it applies gravity once the fall interval is reached.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use arcade_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{is_valid_placement, GameState, Tetromino};
pub use pieces::{shape_for, Matrix};
pub use rng::{PieceQueue, Randomizer, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_score, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
