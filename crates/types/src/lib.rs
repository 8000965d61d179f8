//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: column `GRID_WIDTH / 2 - size / 2`, row 0
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame period of the terminal runner (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_FALL_MS` | 100 | Fastest gravity interval |
//!
//! # Fall Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use arcade_tetris_types::{PieceKind, GRID_HEIGHT, GRID_WIDTH, LINE_POINTS};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(LINE_POINTS[3], 800);
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Frame period of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const FALL_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const MIN_FALL_MS: u32 = 100;

/// Score needed per level step (`level = score / POINTS_PER_LEVEL + 1`)
pub const POINTS_PER_LEVEL: u32 = 5000;

/// Base points for clearing 1, 2, 3 or 4 rows in one lock.
///
/// Multiplied by the level that was current when the lock happened.
pub const LINE_POINTS: [u32; 4] = [100, 300, 500, 800];

/// Largest matrix side in the piece catalog (the I piece is 4x4).
pub const MAX_MATRIX: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_and_scoring_defaults() {
        assert_eq!(BASE_FALL_MS, 1000);
        assert_eq!(FALL_STEP_MS, 100);
        assert_eq!(MIN_FALL_MS, 100);
        assert_eq!(POINTS_PER_LEVEL, 5000);
        assert_eq!(LINE_POINTS, [100, 300, 500, 800]);
    }

    #[test]
    fn piece_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Intents that can be applied to the game core
///
/// These are issued by the input layer. Each maps to one state machine
/// transition; intents that do not apply in the current phase are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise in place (no wall kicks)
    Rotate,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Pause or resume
    TogglePause,
    /// Start a new session after game over
    Restart,
}

/// Session phase of the game core
///
/// - **Falling**: an active piece is in play
/// - **Paused**: gravity and piece intents are suspended
/// - **GameOver**: terminal until an explicit restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    Paused,
    GameOver,
}

/// Emitted after every lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the rows cleared by this lock.
    pub points: u32,
}

/// A cell on the playfield
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Cell filled with the color of the piece that locked there
pub type Cell = Option<Rgb>;
