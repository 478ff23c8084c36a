//! Typed-answer checking and scoring.

use guess_core::{compare_guess, display_name, GuessResult};
use serde::Serialize;

use super::find_card;
use crate::error::Result;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub card_id: i64,
    pub card_name: String,
    pub display_name: String,
    #[serde(flatten)]
    pub result: GuessResult,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub difficulty: u8,
    pub streak: u32,
    pub hint_used: bool,
    pub multiplier: f64,
    pub points: u32,
}

pub fn check(state: &AppState, card: &str, guess: &str) -> Result<CheckResponse> {
    let card = find_card(state, card)?;
    let result = compare_guess(guess, &card.name);
    tracing::debug!(card_id = card.id, correct = result.is_correct, "guess checked");

    Ok(CheckResponse {
        card_id: card.id,
        card_name: card.name.clone(),
        display_name: display_name(&card.name),
        result,
    })
}

pub fn score(state: &AppState, difficulty: u8, streak: u32, hint_used: bool) -> ScoreResponse {
    ScoreResponse {
        difficulty,
        streak,
        hint_used,
        multiplier: state.rules.multiplier_for(streak),
        points: state.rules.score(hint_used, streak, difficulty),
    }
}
