//! Environment configuration.
//!
//! `.env` is loaded by `run()` before this is read. Command-line flags take
//! precedence over anything found here.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

pub const CARD_DB_VAR: &str = "VTES_CARD_DB";
pub const PREMIUM_VAR: &str = "VTES_PREMIUM_DISTRACTORS";
pub const SCORE_RULES_VAR: &str = "VTES_SCORE_RULES";

/// Where the data files live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON array of cards.
    pub card_db: Option<PathBuf>,
    /// JSON object of card id to distractor names.
    pub premium_distractors: Option<PathBuf>,
    /// JSON overrides for the score table.
    pub score_rules: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        Self {
            card_db: path(CARD_DB_VAR),
            premium_distractors: path(PREMIUM_VAR),
            score_rules: path(SCORE_RULES_VAR),
        }
    }

    /// Replace any value given on the command line.
    pub fn with_overrides(
        mut self,
        card_db: Option<PathBuf>,
        premium_distractors: Option<PathBuf>,
        score_rules: Option<PathBuf>,
    ) -> Self {
        if card_db.is_some() {
            self.card_db = card_db;
        }
        if premium_distractors.is_some() {
            self.premium_distractors = premium_distractors;
        }
        if score_rules.is_some() {
            self.score_rules = score_rules;
        }
        self
    }

    pub fn card_db(&self) -> Result<&Path> {
        self.card_db.as_deref().ok_or_else(|| {
            CliError::Config(format!("{CARD_DB_VAR} must be set or --card-db given"))
        })
    }
}
