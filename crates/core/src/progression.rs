//! Level progression formula.
//!
//! `level` and `until_next_level` are derived from `experience` and nowhere
//! else; every write path that touches experience must go through
//! [`Progression::from_experience`] exactly once so stored rows never drift
//! from the formula.

use serde::Serialize;

/// Derived progression state for a given experience value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progression {
    pub level: i32,
    pub until_next_level: i32,
}

impl Progression {
    /// Compute the level and remaining experience for the next level.
    ///
    /// ```text
    /// level          = floor((sqrt(2500 + 200*exp) - 50) / 100)
    /// untilNextLevel = 50*(level+1)*(level+2) - exp
    /// ```
    ///
    /// Total over the valid experience domain `[0, 10_000_000]`. The radicand
    /// is non-negative, so truncation toward zero matches the floor.
    pub fn from_experience(experience: i32) -> Self {
        let radicand = 2500.0 + 200.0 * f64::from(experience);
        let level = ((radicand.sqrt() - 50.0) / 100.0) as i32;
        let until_next_level = 50 * (level + 1) * (level + 2) - experience;
        Self {
            level,
            until_next_level,
        }
    }
}
