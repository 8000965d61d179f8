//! Runner configuration from environment variables.
//!
//! - `TETRIS_SEED`: RNG seed (`u32`, default derived from the system clock)
//! - `TETRIS_RANDOMIZER`: `uniform` (default) or `bag`
//! - `TETRIS_TICK_MS`: frame period in milliseconds (default 16, clamped to 1..=1000)
//!
//! Malformed values are reported on stderr and replaced by the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Randomizer;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub randomizer: Randomizer,
    pub tick_ms: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            randomizer: Randomizer::Uniform,
            tick_ms: TICK_MS,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = read("TETRIS_SEED")
            .and_then(|s| parse_or_warn("TETRIS_SEED", &s, |v| v.parse::<u32>().ok()))
            .unwrap_or_else(clock_seed);

        let randomizer = read("TETRIS_RANDOMIZER")
            .and_then(|s| parse_or_warn("TETRIS_RANDOMIZER", &s, Randomizer::from_str))
            .unwrap_or_default();

        let tick_ms = read("TETRIS_TICK_MS")
            .and_then(|s| parse_or_warn("TETRIS_TICK_MS", &s, |v| v.parse::<u32>().ok()))
            .map(|ms| ms.clamp(1, 1000))
            .unwrap_or(TICK_MS);

        Self {
            seed,
            randomizer,
            tick_ms,
        }
    }
}

fn parse_or_warn<T>(key: &str, raw: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() {
        eprintln!("[Config] ignoring {}={:?}: invalid value", key, raw);
    }
    parsed
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
