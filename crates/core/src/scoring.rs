//! Scoring module - line-clear points, level curve, and fall speed
//!
//! - Clearing N rows in one lock awards `LINE_POINTS[N-1] * level`.
//! - The level is derived from the total score: `score / 5000 + 1`.
//! - Gravity speeds up by 100ms per level, down to a 100ms floor.

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, LINE_POINTS, MIN_FALL_MS, POINTS_PER_LEVEL};

/// Points for clearing `lines` rows at `level`.
/// Returns 0 for 0 lines or more than 4.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > LINE_POINTS.len() {
        return 0;
    }
    LINE_POINTS[lines - 1].saturating_mul(level)
}

/// Level for a total score (1-based)
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds)
pub fn fall_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(reduction).max(MIN_FALL_MS)
}
