//! Rule-based deck archetype detection.
//!
//! A single pass over the decklist builds a [`DeckProfile`] of keyword and
//! type counters. Independent threshold rules then award points to
//! archetypes, signature cards add a flat bonus, and the highest score wins
//! if it clears [`MIN_SCORE`].

use crate::types::{Archetype, DeckCard, DeckEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Below this the deck is `Unknown`.
pub const MIN_SCORE: u32 = 10;

/// Awarded once per signature card present in the deck.
pub const SIGNATURE_BONUS: u32 = 30;

/// Crypt title keywords.
const TITLES: [&str; 12] = [
    "prince",
    "justicar",
    "primogen",
    "archbishop",
    "cardinal",
    "bishop",
    "baron",
    "priscus",
    "regent",
    "inner circle",
    "magaji",
    "kholo",
];

/// Lower-cased card names that mark an archetype on their own.
pub static SIGNATURE_CARDS: &[(&str, Archetype)] = &[
    ("spying mission", Archetype::StealthBleed),
    ("lost in crowds", Archetype::StealthBleed),
    ("faceless night", Archetype::StealthBleed),
    ("cloak the gathering", Archetype::StealthBleed),
    ("govern the unaligned", Archetype::Powerbleed),
    ("conditioning", Archetype::Powerbleed),
    ("kiss of ra", Archetype::Powerbleed),
    ("immortal grapple", Archetype::Rush),
    ("bum's rush", Archetype::Rush),
    ("taste of vitae", Archetype::Rush),
    ("torn signpost", Archetype::Rush),
    ("villein", Archetype::Swarm),
    ("anarch revolt", Archetype::Swarm),
    ("the embrace", Archetype::Swarm),
    ("wake with evening's freshness", Archetype::Wall),
    ("on the qui vive", Archetype::Wall),
    ("second tradition: domain", Archetype::Wall),
    ("mind numb", Archetype::LockBleed),
    ("sleeping mind", Archetype::LockBleed),
    ("catatonic fear", Archetype::LockBleed),
    ("parity shift", Archetype::Vote),
    ("kine resources contested", Archetype::Vote),
    ("conservative agitation", Archetype::Vote),
    ("ancient influence", Archetype::Vote),
    ("bewitching oration", Archetype::VoteBleed),
    ("voter captivation", Archetype::VoteBleed),
    ("aire of elation", Archetype::VoteBleed),
    ("information highway", Archetype::Toolbox),
    ("dreams of the sphinx", Archetype::Toolbox),
    ("ashur tablets", Archetype::Combo),
    ("the crimson fury", Archetype::Combo),
    ("gregory winter", Archetype::Allies),
    ("carlton van wyk", Archetype::Allies),
    ("ossian", Archetype::Allies),
];

/// Counters gathered from one pass over a decklist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckProfile {
    pub library_total: u64,
    pub crypt_total: u64,
    pub stealth: u64,
    pub bleed: u64,
    pub stealth_or_bleed: u64,
    pub vote_modifiers: u64,
    pub combat: u64,
    pub reaction: u64,
    pub political: u64,
    pub rush: u64,
    pub wake: u64,
    pub allies: u64,
    pub tap: u64,
    pub crypt_capacity: u64,
    pub crypt_with_capacity: u64,
    pub crypt_disciplines: BTreeMap<String, u64>,
    pub titled: u64,
    pub obfuscate_dominate: u64,
    /// Signature bonus per archetype, indexed like `Archetype::SCORED`.
    pub signature_bonus: [u32; 11],
}

impl DeckProfile {
    pub fn from_decklist(decklist: &[DeckEntry]) -> Self {
        let mut profile = Self::default();
        for entry in decklist {
            profile.add(entry);
        }
        profile
    }

    fn add(&mut self, entry: &DeckEntry) {
        let count = u64::from(entry.count);
        let card = &entry.card;

        if let Some(archetype) = signature_archetype(&card.name) {
            if let Some(index) = archetype.index() {
                self.signature_bonus[index] = self.signature_bonus[index].saturating_add(SIGNATURE_BONUS);
            }
        }

        if card.is_crypt() {
            self.add_crypt(card, count);
        } else {
            self.add_library(card, count);
        }
    }

    fn add_crypt(&mut self, card: &DeckCard, count: u64) {
        bump(&mut self.crypt_total, count);
        if let Some(capacity) = card.capacity {
            bump(&mut self.crypt_capacity, u64::from(capacity).saturating_mul(count));
            bump(&mut self.crypt_with_capacity, count);
        }

        for discipline in &card.disciplines {
            let key = discipline.to_lowercase();
            if key.starts_with("obf") || key.starts_with("dom") {
                bump(&mut self.obfuscate_dominate, count);
            }
            bump(self.crypt_disciplines.entry(key).or_insert(0), count);
        }

        let text = card.card_text.to_lowercase();
        if TITLES.iter().any(|title| text.contains(title)) {
            bump(&mut self.titled, count);
        }
    }

    fn add_library(&mut self, card: &DeckCard, count: u64) {
        bump(&mut self.library_total, count);
        let text = card.card_text.to_lowercase();

        let stealth = text.contains("stealth");
        let bleed = text.contains("bleed") || text.contains("pool damage");
        if stealth {
            bump(&mut self.stealth, count);
        }
        if bleed {
            bump(&mut self.bleed, count);
        }
        if stealth || bleed {
            bump(&mut self.stealth_or_bleed, count);
        }
        if card.has_type("Action Modifier") && text.contains("vote") {
            bump(&mut self.vote_modifiers, count);
        }
        if card.has_type("Combat") {
            bump(&mut self.combat, count);
        }
        if card.has_type("Reaction") {
            bump(&mut self.reaction, count);
        }
        if card.has_type("Political Action") {
            bump(&mut self.political, count);
        }
        if text.contains("enter combat") || text.contains("rush") || text.contains("attack") {
            bump(&mut self.rush, count);
        }
        if text.contains("wake") || text.contains("unlock") {
            bump(&mut self.wake, count);
        }
        if card.has_type("Ally") || text.contains("recruit") {
            bump(&mut self.allies, count);
        }
        if mentions_tapping_minions(&text) {
            bump(&mut self.tap, count);
        }
    }

    /// Share of the library, 0 for an empty library.
    pub fn library_ratio(&self, count: u64) -> f64 {
        if self.library_total == 0 {
            0.0
        } else {
            count as f64 / self.library_total as f64
        }
    }

    /// Per-crypt-card share, 0 for an empty crypt.
    pub fn crypt_ratio(&self, count: u64) -> f64 {
        if self.crypt_total == 0 {
            0.0
        } else {
            count as f64 / self.crypt_total as f64
        }
    }

    pub fn average_capacity(&self) -> Option<f64> {
        (self.crypt_with_capacity > 0)
            .then(|| self.crypt_capacity as f64 / self.crypt_with_capacity as f64)
    }

    pub fn discipline_share(&self, discipline: &str) -> f64 {
        let total = self.crypt_disciplines.get(discipline).copied().unwrap_or(0);
        self.crypt_ratio(total)
    }

    /// Disciplines present on at least a quarter of the crypt.
    pub fn broad_disciplines(&self) -> usize {
        self.crypt_disciplines
            .values()
            .filter(|total| self.crypt_ratio(**total) >= 0.25)
            .count()
    }
}

/// Counters saturate instead of wrapping on huge card counts.
fn bump(counter: &mut u64, count: u64) {
    *counter = counter.saturating_add(count);
}

/// "tap" as a word (not "untap") alongside a minion or vampire.
fn mentions_tapping_minions(text: &str) -> bool {
    let taps = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|word| word == "tap");
    taps && (text.contains("minion") || text.contains("vampire"))
}

fn signature_archetype(name: &str) -> Option<Archetype> {
    let name = name.trim().to_lowercase();
    SIGNATURE_CARDS
        .iter()
        .find(|(signature, _)| *signature == name)
        .map(|(_, archetype)| *archetype)
}

/// One additive scoring rule.
pub struct Rule {
    pub archetype: Archetype,
    pub name: &'static str,
    pub points: u32,
    applies: fn(&DeckProfile) -> bool,
}

impl Rule {
    pub fn applies(&self, profile: &DeckProfile) -> bool {
        (self.applies)(profile)
    }
}

/// Scoring rules in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        archetype: Archetype::StealthBleed,
        name: "stealth and bleed modifiers",
        points: 10,
        applies: |p| p.library_ratio(p.stealth_or_bleed) >= 0.30,
    },
    Rule {
        archetype: Archetype::StealthBleed,
        name: "stealth density",
        points: 5,
        applies: |p| p.library_ratio(p.stealth) >= 0.15,
    },
    Rule {
        archetype: Archetype::StealthBleed,
        name: "obfuscate and dominate crypt",
        points: 5,
        applies: |p| p.crypt_total > 0 && p.crypt_ratio(p.obfuscate_dominate) >= 1.0,
    },
    Rule {
        archetype: Archetype::Powerbleed,
        name: "bleed density",
        points: 8,
        applies: |p| p.library_ratio(p.bleed) >= 0.25,
    },
    Rule {
        archetype: Archetype::Powerbleed,
        name: "bleed without stealth",
        points: 4,
        applies: |p| p.library_ratio(p.bleed) >= 0.25 && p.library_ratio(p.stealth) < 0.10,
    },
    Rule {
        archetype: Archetype::Powerbleed,
        name: "dominate crypt",
        points: 3,
        applies: |p| p.discipline_share("dom") >= 0.5,
    },
    Rule {
        archetype: Archetype::Rush,
        name: "combat entry",
        points: 10,
        applies: |p| p.library_ratio(p.rush) >= 0.15,
    },
    Rule {
        archetype: Archetype::Rush,
        name: "combat cards",
        points: 8,
        applies: |p| p.library_ratio(p.combat) >= 0.25,
    },
    Rule {
        archetype: Archetype::Swarm,
        name: "small crypt",
        points: 20,
        applies: |p| p.average_capacity().is_some_and(|avg| avg < 3.5),
    },
    Rule {
        archetype: Archetype::Wall,
        name: "reaction density",
        points: 15,
        applies: |p| p.library_ratio(p.reaction) >= 0.40,
    },
    Rule {
        archetype: Archetype::Wall,
        name: "wake effects",
        points: 5,
        applies: |p| p.library_ratio(p.wake) >= 0.10,
    },
    Rule {
        archetype: Archetype::Wall,
        name: "combat and reactions",
        points: 5,
        applies: |p| p.library_ratio(p.combat) >= 0.20 && p.library_ratio(p.reaction) >= 0.25,
    },
    Rule {
        archetype: Archetype::LockBleed,
        name: "tapping minions",
        points: 10,
        applies: |p| p.library_ratio(p.tap) >= 0.15,
    },
    Rule {
        archetype: Archetype::LockBleed,
        name: "tapping and bleeding",
        points: 5,
        applies: |p| p.library_ratio(p.tap) >= 0.10 && p.library_ratio(p.bleed) >= 0.15,
    },
    Rule {
        archetype: Archetype::Vote,
        name: "political actions",
        points: 10,
        applies: |p| p.library_ratio(p.political) >= 0.20,
    },
    Rule {
        archetype: Archetype::Vote,
        name: "titled crypt",
        points: 5,
        applies: |p| p.crypt_total > 0 && p.crypt_ratio(p.titled) >= 0.5,
    },
    Rule {
        archetype: Archetype::Vote,
        name: "vote modifiers",
        points: 3,
        applies: |p| p.library_ratio(p.vote_modifiers) >= 0.10,
    },
    Rule {
        archetype: Archetype::VoteBleed,
        name: "politics and bleed",
        points: 12,
        applies: |p| p.library_ratio(p.political) >= 0.10 && p.library_ratio(p.bleed) >= 0.15,
    },
    Rule {
        archetype: Archetype::Toolbox,
        name: "broad discipline spread",
        points: 10,
        applies: |p| p.broad_disciplines() >= 5,
    },
    Rule {
        archetype: Archetype::Allies,
        name: "ally density",
        points: 15,
        applies: |p| p.library_ratio(p.allies) >= 0.20,
    },
    Rule {
        archetype: Archetype::Allies,
        name: "ally presence",
        points: 5,
        applies: |p| p.library_ratio(p.allies) >= 0.10,
    },
];

/// Score of one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeScore {
    pub archetype: Archetype,
    pub score: u32,
}

/// Detected archetype with the scores behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub archetype: Archetype,
    pub score: u32,
    /// Every scored archetype, in evaluation order.
    pub scores: Vec<ArchetypeScore>,
}

/// Classify a decklist, keeping the per-archetype scores.
pub fn classify(decklist: &[DeckEntry]) -> Classification {
    let profile = DeckProfile::from_decklist(decklist);
    classify_profile(&profile)
}

pub fn classify_profile(profile: &DeckProfile) -> Classification {
    let mut totals = profile.signature_bonus;

    for rule in RULES {
        if rule.applies(profile) {
            if let Some(index) = rule.archetype.index() {
                totals[index] = totals[index].saturating_add(rule.points);
                trace!(archetype = %rule.archetype, rule = rule.name, points = rule.points, "rule fired");
            }
        }
    }

    let scores: Vec<ArchetypeScore> = Archetype::SCORED
        .iter()
        .zip(totals)
        .map(|(archetype, score)| ArchetypeScore {
            archetype: *archetype,
            score,
        })
        .collect();

    // First-seen max: later archetypes only win on a strictly higher score.
    let mut best = ArchetypeScore {
        archetype: Archetype::Unknown,
        score: 0,
    };
    for candidate in &scores {
        if candidate.score > best.score {
            best = *candidate;
        }
    }

    let archetype = if best.score >= MIN_SCORE {
        best.archetype
    } else {
        Archetype::Unknown
    };
    debug!(%archetype, score = best.score, "deck classified");

    Classification {
        archetype,
        score: best.score,
        scores,
    }
}

/// Detect the archetype of a decklist.
pub fn detect_archetype(decklist: &[DeckEntry]) -> Archetype {
    classify(decklist).archetype
}
