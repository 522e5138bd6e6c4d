//! Scoring module - line-clear awards, drop points, level and gravity
//!
//! Notes on the rules:
//! - Combo resets on every lock that clears nothing; back-to-back only resets on a 1-3 line
//!   clear. A non-clearing lock between two 4-line clears keeps the back-to-back chain alive.
//! - The back-to-back 3/2 multiplier applies to the line points including the combo bonus;
//!   the perfect-clear bonus is added afterwards.
//! - Level never decreases.

use crate::types::{
    B2B_DENOMINATOR, B2B_NUMERATOR, BASE_DROP_SECS, COMBO_BASE, LINES_PER_LEVEL, LINE_SCORES,
    MIN_DROP_SECS, PERFECT_CLEAR_BASE,
};

/// Running score counters for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringState {
    pub score: u32,
    pub level: u32,
    pub total_lines: u32,
    /// Consecutive line-clearing locks
    pub combo: u32,
    /// Consecutive 4-line clears
    pub back_to_back: u32,
}

impl ScoringState {
    pub fn new(start_level: u32) -> Self {
        Self {
            score: 0,
            level: start_level.max(1),
            total_lines: 0,
            combo: 0,
            back_to_back: 0,
        }
    }

    /// Apply one lock's line clear and return the points it earned
    pub fn award_line_clear(&mut self, lines_cleared: u32, is_perfect_clear: bool) -> u32 {
        if lines_cleared == 0 {
            self.combo = 0;
            return 0;
        }

        self.total_lines = self.total_lines.saturating_add(lines_cleared);

        // Level keeps rising with cleared lines, so every product saturates.
        let level = self.level;
        let mut points = base_points(lines_cleared).saturating_mul(level);
        if self.combo > 0 {
            let bonus = COMBO_BASE.saturating_mul(self.combo).saturating_mul(level);
            points = points.saturating_add(bonus);
        }
        self.combo = self.combo.saturating_add(1);

        if lines_cleared == 4 {
            if self.back_to_back > 0 {
                points = apply_b2b_multiplier(points);
            }
            self.back_to_back = self.back_to_back.saturating_add(1);
        } else {
            self.back_to_back = 0;
        }

        if is_perfect_clear {
            points = points.saturating_add(PERFECT_CLEAR_BASE.saturating_mul(level));
        }

        self.score = self.score.saturating_add(points);
        self.level = self.level.max(level_for_lines(self.total_lines));
        points
    }

    pub fn award_soft_drop(&mut self, cells: u32) {
        self.score = self.score.saturating_add(cells);
    }

    pub fn award_hard_drop(&mut self, cells: u32) {
        self.score = self.score.saturating_add(cells.saturating_mul(2));
    }

    /// Lines still needed to reach the next level boundary
    pub fn lines_to_next_level(&self) -> i64 {
        i64::from(self.level) * i64::from(LINES_PER_LEVEL) - i64::from(self.total_lines)
    }
}

impl Default for ScoringState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Base points for a clear before the level multiplier
pub fn base_points(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Apply the back-to-back multiplier (3/2, truncating)
pub fn apply_b2b_multiplier(points: u32) -> u32 {
    let scaled = u64::from(points) * u64::from(B2B_NUMERATOR) / u64::from(B2B_DENOMINATOR);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Level reached after clearing `total_lines` from level 1
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in seconds per row
pub fn drop_interval(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as i32;
    let base = (0.8 - steps as f64 * 0.007).max(0.0);
    (BASE_DROP_SECS * base.powi(steps)).max(MIN_DROP_SECS)
}
