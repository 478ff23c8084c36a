//! Multiple-choice options.

use guess_core::distractors::OPTIONS_PER_QUESTION;
use guess_core::{
    display_name, generate_crypt_options, generate_library_options, Card, CardCatalog, Population,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::find_card;
use crate::error::Result;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub population: Population,
    pub correct: Card,
    pub distractors: Vec<Card>,
    /// Display names of the correct card and every distractor, shuffled.
    pub choices: Vec<String>,
}

pub fn options<R: Rng + ?Sized>(state: &AppState, card: &str, rng: &mut R) -> Result<OptionsResponse> {
    let correct = find_card(state, card)?;
    let population = correct.population();

    let distractors = match population {
        Population::Crypt => generate_crypt_options(correct, state.catalog.crypt_cards(), rng),
        Population::Library => {
            let detail = state.catalog.card_detail(correct.id);
            generate_library_options(
                correct,
                state.catalog.library_cards(),
                detail.as_ref(),
                state.premium.as_deref(),
                rng,
            )
        }
    };

    if distractors.len() < OPTIONS_PER_QUESTION {
        tracing::warn!(
            card_id = correct.id,
            found = distractors.len(),
            "not enough distractors in pool"
        );
    }

    let mut choices: Vec<String> = std::iter::once(correct)
        .chain(distractors.iter())
        .map(|c| display_name(&c.name))
        .collect();
    choices.shuffle(rng);

    Ok(OptionsResponse {
        population,
        correct: correct.clone(),
        distractors,
        choices,
    })
}
