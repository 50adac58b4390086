//! Scoring module - one point per cleared line
//!
//! A plain single-writer accumulator. No level multipliers, combos or drop
//! bonuses.

/// Running score of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points. Saturates instead of wrapping so the score never decreases.
    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn get(&self) -> u32 {
        self.value
    }
}

/// Points awarded for clearing `lines` rows at once.
pub fn line_clear_points(lines: usize) -> u32 {
    u32::try_from(lines).unwrap_or(u32::MAX)
}
