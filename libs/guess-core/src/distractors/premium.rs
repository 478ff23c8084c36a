//! Hand-curated distractor lists.

use super::OPTIONS_PER_QUESTION;
use crate::error::DataError;
use crate::matching::normalize;
use crate::types::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Card id to an ordered list of distractor names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PremiumDistractors {
    entries: HashMap<i64, Vec<String>>,
}

impl PremiumDistractors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object keyed by card id.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, card_id: i64, names: Vec<String>) {
        self.entries.insert(card_id, names);
    }

    pub fn get(&self, card_id: i64) -> Option<&[String]> {
        self.entries.get(&card_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the curated names for `correct` against `pool`.
    ///
    /// Returns the first three resolved cards in listed order, or `None`
    /// when there is no entry or fewer than three names resolve.
    pub fn resolve(&self, correct: &Card, pool: &[Card]) -> Option<Vec<Card>> {
        let names = self.get(correct.id)?;
        let mut resolved: Vec<Card> = Vec::with_capacity(OPTIONS_PER_QUESTION);

        for name in names {
            if resolved.len() == OPTIONS_PER_QUESTION {
                break;
            }
            let wanted = normalize(name, false);
            let found = pool.iter().find(|card| {
                card.id != correct.id
                    && !resolved.iter().any(|r| r.id == card.id)
                    && normalize(&card.name, false) == wanted
            });
            if let Some(card) = found {
                resolved.push(card.clone());
            }
        }

        if resolved.len() < OPTIONS_PER_QUESTION {
            tracing::debug!(
                card_id = correct.id,
                resolved = resolved.len(),
                "premium distractors incomplete"
            );
            return None;
        }
        Some(resolved)
    }
}
