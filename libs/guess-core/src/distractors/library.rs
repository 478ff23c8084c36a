//! Wrong answers for library cards.

use super::{accumulate, pick, PremiumDistractors, Tier, OPTIONS_PER_QUESTION};
use crate::similarity::is_name_too_similar;
use crate::types::{Card, CardDetail, CostProfile};
use rand::Rng;
use tracing::debug;

/// Disciplines and costs of the correct card, after applying any
/// authoritative detail.
#[derive(Debug, Clone)]
pub struct TargetProfile<'a> {
    pub disciplines: &'a [String],
    pub cost: CostProfile,
}

impl<'a> TargetProfile<'a> {
    pub fn new(correct: &'a Card, detail: Option<&'a CardDetail>) -> Self {
        let disciplines = detail
            .and_then(|d| d.disciplines.as_deref())
            .unwrap_or(&correct.disciplines);
        let cost = detail.map_or_else(|| correct.cost(), CardDetail::cost);
        Self { disciplines, cost }
    }

    pub fn is_indiscriminate(&self) -> bool {
        self.disciplines.is_empty()
    }
}

/// Generate up to three plausible wrong answers for a library card.
///
/// A premium entry with at least three resolvable names wins outright and
/// keeps its listed order. Otherwise the heuristic cascade runs.
pub fn generate_library_options<R: Rng + ?Sized>(
    correct: &Card,
    pool: &[Card],
    detail: Option<&CardDetail>,
    premium: Option<&PremiumDistractors>,
    rng: &mut R,
) -> Vec<Card> {
    if let Some(options) = premium.and_then(|p| p.resolve(correct, pool)) {
        debug!(card_id = correct.id, "using premium distractors");
        return options;
    }

    let target = TargetProfile::new(correct, detail);
    let tiers = library_tiers(correct, &target);
    let candidates = accumulate(pool, &tiers, OPTIONS_PER_QUESTION);
    pick(candidates, OPTIONS_PER_QUESTION, rng)
}

/// The library cascade, strictest first.
pub fn library_tiers<'a>(correct: &'a Card, target: &'a TargetProfile<'a>) -> Vec<Tier<'a>> {
    vec![
        Tier::new("same difficulty, disciplines and cost", move |c: &Card| {
            base_filter(correct, c)
                && c.difficulty == correct.difficulty
                && disciplines_compatible(target, c)
                && similar_cost(target.cost, c.cost())
        }),
        Tier::new("same difficulty and disciplines", move |c: &Card| {
            base_filter(correct, c)
                && c.difficulty == correct.difficulty
                && disciplines_compatible(target, c)
        }),
        Tier::new("same difficulty and indiscriminate status", move |c: &Card| {
            base_filter(correct, c)
                && c.difficulty == correct.difficulty
                && target.is_indiscriminate() == c.disciplines.is_empty()
        }),
        Tier::new("same difficulty", move |c: &Card| {
            base_filter(correct, c) && c.difficulty == correct.difficulty
        }),
        Tier::new("same types", move |c: &Card| base_filter(correct, c)),
        Tier::new("same types, re-filtered", move |c: &Card| {
            c.id != correct.id && same_type_set(&correct.types, &c.types) && !is_name_too_similar(correct, c)
        }),
        Tier::new("any card", move |c: &Card| {
            c.id != correct.id && !is_name_too_similar(correct, c)
        }),
    ]
}

/// Different card, identical type set, dissimilar name.
pub fn base_filter(correct: &Card, candidate: &Card) -> bool {
    candidate.id != correct.id
        && same_type_set(&correct.types, &candidate.types)
        && !is_name_too_similar(correct, candidate)
}

/// Order-independent type set equality.
pub fn same_type_set(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let sorted = |types: &[String]| {
        let mut lowered: Vec<String> = types.iter().map(|t| t.to_lowercase()).collect();
        lowered.sort_unstable();
        lowered
    };
    sorted(a) == sorted(b)
}

/// Both indiscriminate, or at least one discipline in common.
pub fn disciplines_compatible(target: &TargetProfile<'_>, candidate: &Card) -> bool {
    if target.is_indiscriminate() && candidate.disciplines.is_empty() {
        return true;
    }
    target.disciplines.iter().any(|d| {
        candidate
            .disciplines
            .iter()
            .any(|other| other.eq_ignore_ascii_case(d))
    })
}

/// Same populated cost field, or neither card costs anything.
pub fn similar_cost(target: CostProfile, candidate: CostProfile) -> bool {
    if target.is_free() {
        return candidate.is_free();
    }
    (target.blood && candidate.blood)
        || (target.pool && candidate.pool)
        || (target.conviction && candidate.conviction)
}
