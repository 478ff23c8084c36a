//! Multiple-choice distractor generation.
//!
//! Both populations use the same search: an ordered list of tiers, each a
//! pure predicate over the candidate pool and each looser than the last.
//! Tiers are applied in order, accumulating distinct candidates, until
//! enough have been found. The accumulated set is then shuffled with the
//! caller's RNG and truncated.

pub mod crypt;
pub mod library;
pub mod premium;

use crate::types::Card;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, trace};

pub use crypt::generate_crypt_options;
pub use library::generate_library_options;
pub use premium::PremiumDistractors;

/// Wrong answers shown next to the correct one.
pub const OPTIONS_PER_QUESTION: usize = 3;

/// One step of a distractor cascade.
pub struct Tier<'a> {
    pub name: &'static str,
    predicate: Box<dyn Fn(&Card) -> bool + 'a>,
}

impl<'a> Tier<'a> {
    pub fn new(name: &'static str, predicate: impl Fn(&Card) -> bool + 'a) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
        }
    }

    pub fn accepts(&self, card: &Card) -> bool {
        (self.predicate)(card)
    }
}

impl std::fmt::Debug for Tier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tier").field("name", &self.name).finish()
    }
}

/// Apply `tiers` in order until at least `target` distinct cards are found.
///
/// A tier always adds every match it finds; the target is only checked
/// between tiers.
pub fn accumulate<'c>(pool: &'c [Card], tiers: &[Tier<'_>], target: usize) -> Vec<&'c Card> {
    let mut found: Vec<&Card> = Vec::new();
    let mut seen: HashSet<i64> = HashSet::new();

    for tier in tiers {
        if found.len() >= target {
            break;
        }
        let before = found.len();
        for card in pool {
            if tier.accepts(card) && seen.insert(card.id) {
                found.push(card);
            }
        }
        trace!(tier = tier.name, added = found.len() - before, "tier applied");
    }

    debug!(candidates = found.len(), "distractor candidates accumulated");
    found
}

/// Shuffle candidates and keep the first `count`.
pub fn pick<R: Rng + ?Sized>(mut candidates: Vec<&Card>, count: usize, rng: &mut R) -> Vec<Card> {
    candidates.shuffle(rng);
    candidates.into_iter().take(count).cloned().collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::Card;

    pub fn card(id: i64, name: &str) -> Card {
        Card {
            id,
            name: name.to_string(),
            types: vec![],
            difficulty: 1,
            clan: None,
            capacity: None,
            gender: None,
            disciplines: vec![],
            blood_cost: None,
            pool_cost: None,
            conviction_cost: None,
            text: String::new(),
            count: 0,
        }
    }

    pub fn vampire(id: i64, name: &str, clan: &str, capacity: u8, gender: &str, difficulty: u8) -> Card {
        Card {
            types: vec!["Vampire".into()],
            clan: Some(clan.into()),
            capacity: Some(capacity),
            gender: Some(gender.into()),
            difficulty,
            ..card(id, name)
        }
    }

    pub fn library(id: i64, name: &str, types: &[&str], disciplines: &[&str], difficulty: u8) -> Card {
        Card {
            types: types.iter().map(|t| t.to_string()).collect(),
            disciplines: disciplines.iter().map(|d| d.to_string()).collect(),
            difficulty,
            ..card(id, name)
        }
    }

    pub fn ids(cards: &[Card]) -> Vec<i64> {
        let mut ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids
    }
}
