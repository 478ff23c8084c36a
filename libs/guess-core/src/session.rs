//! Running totals for one play session.
//!
//! The engine keeps no state between calls; a host owns a `GameSession`
//! for the length of a game and submits its `SessionSummary` when done.

use crate::scoring::ScoreRules;
use crate::types::GameMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a finished session is credited to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum PlayerIdentity {
    User(String),
    /// Debug token for players who are not signed in.
    Anonymous(String),
}

impl PlayerIdentity {
    pub fn anonymous() -> Self {
        Self::Anonymous(Uuid::new_v4().to_string())
    }
}

/// Outcome of one answered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points: u32,
    /// Streak after this answer.
    pub streak: u32,
}

/// Values the leaderboard service accepts for a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub player: PlayerIdentity,
    pub mode: GameMode,
    pub score: u64,
    pub cards_played: u32,
    pub cards_correct: u32,
    pub best_streak: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Score and streak tracking for a play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    rules: ScoreRules,
    score: u64,
    streak: u32,
    best_streak: u32,
    cards_played: u32,
    cards_correct: u32,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_rules(mode, ScoreRules::default())
    }

    pub fn with_rules(mode: GameMode, rules: ScoreRules) -> Self {
        Self {
            mode,
            rules,
            score: 0,
            streak: 0,
            best_streak: 0,
            cards_played: 0,
            cards_correct: 0,
            started_at: Utc::now(),
        }
    }

    /// Record one answer. Points use the streak before this answer.
    pub fn record(&mut self, correct: bool, hint_used: bool, difficulty: u8) -> AnswerOutcome {
        self.cards_played += 1;

        if !correct {
            self.streak = 0;
            return AnswerOutcome {
                correct,
                points: 0,
                streak: 0,
            };
        }

        let points = self.rules.score(hint_used, self.streak, difficulty);
        self.score += u64::from(points);
        self.cards_correct += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);

        AnswerOutcome {
            correct,
            points,
            streak: self.streak,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn cards_played(&self) -> u32 {
        self.cards_played
    }

    pub fn cards_correct(&self) -> u32 {
        self.cards_correct
    }

    pub fn summary(&self, player: PlayerIdentity) -> SessionSummary {
        SessionSummary {
            player,
            mode: self.mode,
            score: self.score,
            cards_played: self.cards_played,
            cards_correct: self.cards_correct,
            best_streak: self.best_streak,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}
