//! Arcade Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `arcade_tetris::{core, input, term, types}`
//! and hosts the runner's environment configuration.

pub mod config;

pub use arcade_tetris_core as core;
pub use arcade_tetris_input as input;
pub use arcade_tetris_term as term;
pub use arcade_tetris_types as types;
