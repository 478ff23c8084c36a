//! Core types for the guess game and archetype classifier.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which half of the card pool a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Population {
    Crypt,
    Library,
}

/// A card from the catalog snapshot.
///
/// Crypt-only and library-only attributes are optional; `population()`
/// derives which set applies from the type tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub disciplines: Vec<String>,
    #[serde(default, alias = "bloodCost", skip_serializing_if = "Option::is_none")]
    pub blood_cost: Option<String>,
    #[serde(default, alias = "poolCost", skip_serializing_if = "Option::is_none")]
    pub pool_cost: Option<String>,
    #[serde(default, alias = "convictionCost", skip_serializing_if = "Option::is_none")]
    pub conviction_cost: Option<String>,
    #[serde(default, alias = "card_text")]
    pub text: String,
    #[serde(default)]
    pub count: u32,
}

fn default_difficulty() -> u8 {
    3
}

impl Card {
    /// Crypt iff the type tags contain "Vampire" or "Imbued".
    pub fn population(&self) -> Population {
        if self.has_type("Vampire") || self.has_type("Imbued") {
            Population::Crypt
        } else {
            Population::Library
        }
    }

    pub fn is_crypt(&self) -> bool {
        self.population() == Population::Crypt
    }

    pub fn is_imbued(&self) -> bool {
        self.has_type("Imbued")
    }

    /// Case-insensitive type tag check.
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// The card's own cost fields.
    pub fn cost(&self) -> CostProfile {
        CostProfile {
            blood: self.blood_cost.is_some(),
            pool: self.pool_cost.is_some(),
            conviction: self.conviction_cost.is_some(),
        }
    }

    /// Convert to the reduced shape the archetype classifier reads.
    pub fn to_deck_card(&self) -> DeckCard {
        DeckCard {
            name: self.name.clone(),
            types: self.types.clone(),
            card_text: self.text.clone(),
            disciplines: self.disciplines.clone(),
            clans: self.clan.iter().cloned().collect(),
            capacity: self.capacity,
        }
    }
}

/// Which cost fields are populated on a library card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostProfile {
    pub blood: bool,
    pub pool: bool,
    pub conviction: bool,
}

impl CostProfile {
    pub fn is_free(&self) -> bool {
        !(self.blood || self.pool || self.conviction)
    }
}

/// Authoritative detail for a single card, used to override the pool
/// entry's disciplines and costs when generating library distractors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disciplines: Option<Vec<String>>,
    #[serde(default, alias = "bloodCost", skip_serializing_if = "Option::is_none")]
    pub blood_cost: Option<String>,
    #[serde(default, alias = "poolCost", skip_serializing_if = "Option::is_none")]
    pub pool_cost: Option<String>,
    #[serde(default, alias = "convictionCost", skip_serializing_if = "Option::is_none")]
    pub conviction_cost: Option<String>,
}

impl CardDetail {
    pub fn from_card(card: &Card) -> Self {
        Self {
            disciplines: Some(card.disciplines.clone()),
            blood_cost: card.blood_cost.clone(),
            pool_cost: card.pool_cost.clone(),
            conviction_cost: card.conviction_cost.clone(),
        }
    }

    pub fn cost(&self) -> CostProfile {
        CostProfile {
            blood: self.blood_cost.is_some(),
            pool: self.pool_cost.is_some(),
            conviction: self.conviction_cost.is_some(),
        }
    }
}

/// Card as seen by the archetype classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckCard {
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub card_text: String,
    #[serde(default)]
    pub disciplines: Vec<String>,
    #[serde(default)]
    pub clans: Vec<String>,
    #[serde(default)]
    pub capacity: Option<u8>,
}

impl DeckCard {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn is_crypt(&self) -> bool {
        self.has_type("Vampire") || self.has_type("Imbued")
    }
}

/// One line of a decklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub count: u32,
    pub card: DeckCard,
}

/// Deck strategy label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Stealth & Bleed")]
    StealthBleed,
    Powerbleed,
    Rush,
    Swarm,
    Wall,
    #[serde(rename = "Lock & Bleed")]
    LockBleed,
    Vote,
    #[serde(rename = "Vote & Bleed")]
    VoteBleed,
    Toolbox,
    Combo,
    Allies,
    Unknown,
}

impl Archetype {
    /// Scoring order. Ties go to the earliest entry.
    pub const SCORED: [Archetype; 11] = [
        Self::StealthBleed,
        Self::Powerbleed,
        Self::Rush,
        Self::Swarm,
        Self::Wall,
        Self::LockBleed,
        Self::Vote,
        Self::VoteBleed,
        Self::Toolbox,
        Self::Combo,
        Self::Allies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StealthBleed => "Stealth & Bleed",
            Self::Powerbleed => "Powerbleed",
            Self::Rush => "Rush",
            Self::Swarm => "Swarm",
            Self::Wall => "Wall",
            Self::LockBleed => "Lock & Bleed",
            Self::Vote => "Vote",
            Self::VoteBleed => "Vote & Bleed",
            Self::Toolbox => "Toolbox",
            Self::Combo => "Combo",
            Self::Allies => "Allies",
            Self::Unknown => "Unknown",
        }
    }

    /// Position in `SCORED`; `None` for `Unknown`.
    pub fn index(&self) -> Option<usize> {
        Self::SCORED.iter().position(|a| a == self)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quiz mode a session was played in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    CryptTyped,
    CryptChoice,
    LibraryTyped,
    LibraryChoice,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CryptTyped => "crypt_typed",
            Self::CryptChoice => "crypt_choice",
            Self::LibraryTyped => "library_typed",
            Self::LibraryChoice => "library_choice",
        }
    }

    pub fn population(&self) -> Population {
        match self {
            Self::CryptTyped | Self::CryptChoice => Population::Crypt,
            Self::LibraryTyped | Self::LibraryChoice => Population::Library,
        }
    }
}

impl FromStr for GameMode {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crypt_typed" => Ok(Self::CryptTyped),
            "crypt_choice" => Ok(Self::CryptChoice),
            "library_typed" => Ok(Self::LibraryTyped),
            "library_choice" => Ok(Self::LibraryChoice),
            other => Err(DataError::UnknownGameMode(other.to_string())),
        }
    }
}
