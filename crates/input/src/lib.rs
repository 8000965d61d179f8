//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents.
//! Timing and repeat policy stay with the caller; this crate only decides
//! which intent a key stands for.

pub mod map;

pub use arcade_tetris_types as types;

pub use map::{handle_key_event, is_repeatable, should_quit};
