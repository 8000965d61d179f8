//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a plain framebuffer that is then flushed to the terminal, rather than
//! going through a widget/layout toolkit.
//!
//! - [`game_view`] is pure: snapshot in, framebuffer out
//! - [`renderer`] owns the terminal and does diffed output
//! - Cells are drawn 2 characters wide to keep blocks roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use arcade_tetris_core as core;
pub use arcade_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
