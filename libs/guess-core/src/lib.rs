//! Core engine for the VTES card-guessing game.
//!
//! Provides:
//! - Name normalization and answer matching for typed guesses
//! - Score calculation with streak multipliers
//! - Multiple-choice distractor generation for crypt and library cards
//! - Rule-based deck archetype detection
//! - Decklist parsing and an in-memory card catalog
//!
//! Everything here is a pure function of its inputs. Randomness is passed
//! in by the caller.

pub mod archetype;
pub mod catalog;
pub mod distractors;
pub mod error;
pub mod matching;
pub mod parser;
pub mod scoring;
pub mod session;
pub mod similarity;
pub mod types;

pub use archetype::{classify, detect_archetype, ArchetypeScore, Classification, DeckProfile};
pub use catalog::{CardCatalog, InMemoryCatalog};
pub use distractors::{generate_crypt_options, generate_library_options, PremiumDistractors};
pub use error::{DataError, ParseError, Result};
pub use matching::{compare_guess, display_name, is_correct_guess, normalize, GuessResult};
pub use parser::{parse_decklist, resolve_decklist, DecklistParser, RawDeckLine};
pub use scoring::{calculate_score, ScoreRules};
pub use session::{GameSession, PlayerIdentity, SessionSummary};
pub use similarity::{are_clan_related, is_name_too_similar};
pub use types::{
    Archetype, Card, CardDetail, DeckCard, DeckEntry, GameMode, Population,
};
