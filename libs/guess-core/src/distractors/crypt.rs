//! Wrong answers for crypt (vampire and imbued) cards.

use super::{accumulate, pick, Tier, OPTIONS_PER_QUESTION};
use crate::similarity::{are_clan_related, is_name_too_similar};
use crate::types::Card;
use rand::Rng;

/// Largest capacity gap between the correct card and a distractor.
const MAX_CAPACITY_GAP: u8 = 2;

/// Generate up to three plausible wrong answers for a crypt card.
///
/// Never returns `correct` itself. Returns fewer than three cards when the
/// pool runs out.
pub fn generate_crypt_options<R: Rng + ?Sized>(
    correct: &Card,
    pool: &[Card],
    rng: &mut R,
) -> Vec<Card> {
    let tiers = crypt_tiers(correct);
    let candidates = accumulate(pool, &tiers, OPTIONS_PER_QUESTION);
    pick(candidates, OPTIONS_PER_QUESTION, rng)
}

/// The crypt cascade, strictest first.
pub fn crypt_tiers(correct: &Card) -> Vec<Tier<'_>> {
    vec![
        Tier::new("same difficulty, related clan", move |c: &Card| {
            base_filter(correct, c)
                && c.difficulty == correct.difficulty
                && are_clan_related(correct.clan.as_deref(), c.clan.as_deref())
        }),
        Tier::new("same difficulty", move |c: &Card| {
            base_filter(correct, c) && c.difficulty == correct.difficulty
        }),
        Tier::new("same difficulty, any capacity", move |c: &Card| {
            loose_filter(correct, c) && gender_matches(correct, c) && c.difficulty == correct.difficulty
        }),
        Tier::new("any difficulty", move |c: &Card| base_filter(correct, c)),
        Tier::new("same gender", move |c: &Card| {
            loose_filter(correct, c) && gender_matches(correct, c)
        }),
        Tier::new("any crypt card", move |c: &Card| loose_filter(correct, c)),
    ]
}

/// Shared by every strict tier: close capacity, matching gender, a
/// dissimilar name, and the imbued guard.
pub fn base_filter(correct: &Card, candidate: &Card) -> bool {
    loose_filter(correct, candidate)
        && capacity_close(correct, candidate)
        && gender_matches(correct, candidate)
}

/// The constraints no tier relaxes.
fn loose_filter(correct: &Card, candidate: &Card) -> bool {
    candidate.id != correct.id
        && imbued_allowed(correct, candidate)
        && !is_name_too_similar(correct, candidate)
}

pub fn capacity_close(correct: &Card, candidate: &Card) -> bool {
    match (correct.capacity, candidate.capacity) {
        (Some(a), Some(b)) => a.abs_diff(b) <= MAX_CAPACITY_GAP,
        _ => false,
    }
}

/// A missing or "?" gender on the correct card matches anything.
pub fn gender_matches(correct: &Card, candidate: &Card) -> bool {
    match correct.gender.as_deref() {
        None | Some("?") => true,
        Some(gender) => candidate.gender.as_deref() == Some(gender),
    }
}

/// Imbued only appear as options for imbued questions.
pub fn imbued_allowed(correct: &Card, candidate: &Card) -> bool {
    !candidate.is_imbued() || correct.is_imbued()
}
