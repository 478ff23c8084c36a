//! Card catalog lookups.

use crate::error::DataError;
use crate::matching::{display_name, normalize};
use crate::types::{Card, CardDetail, Population};
use std::collections::HashMap;

/// Read-only access to a card database snapshot.
pub trait CardCatalog: Send + Sync {
    /// All cards of one population, in catalog order.
    fn cards(&self, population: Population) -> &[Card];

    fn card_by_id(&self, id: i64) -> Option<&Card>;

    /// Look up by name, ignoring case, punctuation and diacritics. Falls
    /// back to the name without group or advanced markers.
    fn card_by_name(&self, name: &str) -> Option<&Card>;

    /// Authoritative disciplines and costs for one card.
    fn card_detail(&self, id: i64) -> Option<CardDetail> {
        self.card_by_id(id).map(CardDetail::from_card)
    }

    fn crypt_cards(&self) -> &[Card] {
        self.cards(Population::Crypt)
    }

    fn library_cards(&self) -> &[Card] {
        self.cards(Population::Library)
    }
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    crypt: Vec<Card>,
    library: Vec<Card>,
    by_id: HashMap<i64, (Population, usize)>,
    by_name: HashMap<String, i64>,
    by_display_name: HashMap<String, i64>,
}

impl InMemoryCatalog {
    /// Build from a list of cards, rejecting duplicate ids.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DataError> {
        let mut catalog = Self::default();
        for card in cards {
            catalog.insert(card)?;
        }
        Ok(catalog)
    }

    /// Load from a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    fn insert(&mut self, card: Card) -> Result<(), DataError> {
        if self.by_id.contains_key(&card.id) {
            return Err(DataError::DuplicateId(card.id));
        }

        self.by_name.entry(normalize(&card.name, false)).or_insert(card.id);
        self.by_display_name
            .entry(normalize(&display_name(&card.name), false))
            .or_insert(card.id);

        let population = card.population();
        let cards = match population {
            Population::Crypt => &mut self.crypt,
            Population::Library => &mut self.library,
        };
        self.by_id.insert(card.id, (population, cards.len()));
        cards.push(card);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl CardCatalog for InMemoryCatalog {
    fn cards(&self, population: Population) -> &[Card] {
        match population {
            Population::Crypt => &self.crypt,
            Population::Library => &self.library,
        }
    }

    fn card_by_id(&self, id: i64) -> Option<&Card> {
        let (population, index) = self.by_id.get(&id)?;
        self.cards(*population).get(*index)
    }

    fn card_by_name(&self, name: &str) -> Option<&Card> {
        let key = normalize(name, false);
        if key.is_empty() {
            return None;
        }
        self.by_name
            .get(&key)
            .or_else(|| self.by_display_name.get(&key))
            .and_then(|id| self.card_by_id(*id))
    }
}
