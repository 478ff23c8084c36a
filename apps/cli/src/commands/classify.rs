//! Decklist archetype detection.

use guess_core::archetype::classify_profile;
use guess_core::{resolve_decklist, Classification, DeckProfile, DecklistParser};
use serde::Serialize;

use crate::error::Result;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub crypt_cards: u64,
    pub library_cards: u64,
    #[serde(flatten)]
    pub classification: Classification,
}

pub fn classify(state: &AppState, content: &str, merge_duplicates: bool) -> Result<ClassifyResponse> {
    let parser = DecklistParser { merge_duplicates };
    let lines = parser.parse(content)?;
    let entries = resolve_decklist(&lines, &*state.catalog)?;

    let profile = DeckProfile::from_decklist(&entries);
    let classification = classify_profile(&profile);
    tracing::info!(
        archetype = %classification.archetype,
        score = classification.score,
        "deck classified"
    );

    Ok(ClassifyResponse {
        crypt_cards: profile.crypt_total,
        library_cards: profile.library_total,
        classification,
    })
}
