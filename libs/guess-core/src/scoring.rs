//! Points awarded for a correct guess.
//!
//! Base points come from the card's difficulty bucket, a hint halves them,
//! and a streak of prior correct answers multiplies the result.

use serde::{Deserialize, Serialize};

/// One streak multiplier tier: applies when the prior streak is at least
/// `min_streak`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakTier {
    pub min_streak: u32,
    pub multiplier: f64,
}

/// Scoring table with configurable parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRules {
    /// Base points for difficulty 1 through 5.
    pub base_points: [u32; 5],
    /// Base points for a difficulty outside 1-5.
    pub default_base: u32,
    /// Checked in order; the first tier the streak reaches wins.
    pub streak_tiers: Vec<StreakTier>,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base_points: [20, 50, 100, 200, 400],
            default_base: 100,
            streak_tiers: vec![
                StreakTier { min_streak: 10, multiplier: 3.0 },
                StreakTier { min_streak: 5, multiplier: 2.0 },
                StreakTier { min_streak: 3, multiplier: 1.5 },
            ],
        }
    }
}

impl ScoreRules {
    pub fn base_for(&self, difficulty: u8) -> u32 {
        match difficulty {
            1..=5 => self.base_points[usize::from(difficulty) - 1],
            _ => self.default_base,
        }
    }

    /// Multiplier for `streak` consecutive prior correct answers.
    pub fn multiplier_for(&self, streak: u32) -> f64 {
        self.streak_tiers
            .iter()
            .find(|tier| streak >= tier.min_streak)
            .map_or(1.0, |tier| tier.multiplier)
    }

    /// Points for one correct answer.
    ///
    /// `current_streak` counts the correct answers before this one.
    pub fn score(&self, hint_used: bool, current_streak: u32, difficulty: u8) -> u32 {
        let mut base = f64::from(self.base_for(difficulty));
        if hint_used {
            base = (base / 2.0).round();
        }
        (base * self.multiplier_for(current_streak)).round() as u32
    }
}

/// Points for one correct answer using the standard table.
pub fn calculate_score(hint_used: bool, current_streak: u32, difficulty: u8) -> u32 {
    ScoreRules::default().score(hint_used, current_streak, difficulty)
}
