//! Scoring module - line-clear points, token rewards, leveling and gravity
//!
//! Rules:
//! - Points: `LINE_SCORES[lines] * level`, using the level before this clear
//!   is counted towards a level-up.
//! - Tokens: clearing `n >= 2` lines at once awards `n - 1` tokens.
//! - Leveling: every lock adds its cleared lines to a counter; once the counter
//!   reaches `LINES_PER_LEVEL` the level goes up by one and the counter restarts
//!   from zero. Lines beyond the threshold are not carried over.
//! - Gravity: `BASE_DROP_MS - level * DROP_MS_PER_LEVEL`, not clamped unless
//!   the caller supplies a floor.

use crate::types::{
    BASE_DROP_MS, DROP_MS_PER_LEVEL, LINES_PER_LEVEL, LINE_SCORES, STARTING_LEVEL,
};

/// Outcome of one merge's line clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub lines: u32,
    pub points: u32,
    pub tokens: u32,
    /// New level if this clear crossed the threshold.
    pub level_up: Option<u32>,
}

/// Calculate line clear points at `level`.
///
/// Counts above 4 score like a 4-line clear.
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level)
}

/// Tokens awarded for clearing `lines` at once.
pub fn tokens_for_clear(lines: u32) -> u32 {
    if lines >= 2 {
        lines - 1
    } else {
        0
    }
}

/// Gravity interval for a level, unclamped. May be zero or negative.
pub fn drop_interval_ms(level: u32) -> i64 {
    BASE_DROP_MS - i64::from(level) * DROP_MS_PER_LEVEL
}

/// Gravity interval with an optional lower bound.
pub fn drop_interval_with_floor_ms(level: u32, floor_ms: Option<u32>) -> i64 {
    let interval = drop_interval_ms(level);
    match floor_ms {
        Some(floor) => interval.max(i64::from(floor)),
        None => interval,
    }
}

/// Level and the level-up line counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelProgress {
    level: u32,
    lines_since_level_up: u32,
}

impl LevelProgress {
    pub fn new() -> Self {
        Self {
            level: STARTING_LEVEL,
            lines_since_level_up: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_since_level_up(&self) -> u32 {
        self.lines_since_level_up
    }

    /// Count cleared lines; returns the new level on a level-up.
    pub fn record(&mut self, lines: u32) -> Option<u32> {
        self.lines_since_level_up = self.lines_since_level_up.saturating_add(lines);
        if self.lines_since_level_up >= LINES_PER_LEVEL {
            self.level = self.level.saturating_add(1);
            self.lines_since_level_up = 0;
            return Some(self.level);
        }
        None
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Score a clear of `lines` rows and advance `progress`.
pub fn score_clear(lines: u32, progress: &mut LevelProgress) -> ClearResult {
    let points = line_clear_points(lines, progress.level());
    let tokens = tokens_for_clear(lines);
    let level_up = progress.record(lines);
    ClearResult {
        lines,
        points,
        tokens,
        level_up,
    }
}
