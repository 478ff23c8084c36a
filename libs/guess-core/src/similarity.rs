//! Guards used when choosing wrong answers: clan kinship and name collisions.

use crate::matching::display_name;
use crate::types::Card;

const ANTITRIBU_SUFFIX: &str = " antitribu";

/// Words shorter than this never count as a name collision.
const MIN_SHARED_WORD_LEN: usize = 3;

/// Whether two clans are the same clan, treating an antitribu as its
/// parent clan.
pub fn are_clan_related(a: Option<&str>, b: Option<&str>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    if a == b {
        return true;
    }
    let base_a = a.strip_suffix(ANTITRIBU_SUFFIX).unwrap_or(a);
    let base_b = b.strip_suffix(ANTITRIBU_SUFFIX).unwrap_or(b);
    base_a == base_b
}

/// Whether two cards' names are close enough that one would give the
/// other away as a multiple-choice option.
pub fn is_name_too_similar(a: &Card, b: &Card) -> bool {
    names_too_similar(&a.name, &b.name)
}

pub fn names_too_similar(a: &str, b: &str) -> bool {
    let a = display_name(a).to_lowercase();
    let b = display_name(b).to_lowercase();

    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }

    let long_words = |name: &str| -> Vec<String> {
        name.split_whitespace()
            .filter(|w| w.chars().count() >= MIN_SHARED_WORD_LEN)
            .map(str::to_string)
            .collect()
    };
    let words_a = long_words(&a);
    let words_b = long_words(&b);

    words_a.iter().any(|wa| {
        words_b
            .iter()
            .any(|wb| wa == wb || wa.contains(wb.as_str()) || wb.contains(wa.as_str()))
    })
}
