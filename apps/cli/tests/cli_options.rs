//! Multiple-choice option command tests.

mod common;

use std::collections::HashSet;

use guess_core::Population;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vtes_guess_cli::commands::{execute, options, Command};
use vtes_guess_cli::error::CliError;

use common::TestContext;

#[test]
fn test_crypt_options_exclude_target_and_imbued() {
    let ctx = TestContext::new();
    let mut rng = StdRng::seed_from_u64(7);
    let response = options::options(&ctx.state, "Anson", &mut rng).unwrap();

    assert_eq!(response.population, Population::Crypt);
    assert_eq!(response.correct.id, 200001);
    assert_eq!(response.distractors.len(), 3);

    let ids: HashSet<i64> = response.distractors.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 3);
    assert!(!ids.contains(&200001));
    assert!(!ids.contains(&200007));
    assert!(response.distractors.iter().all(|c| c.is_crypt()));
}

#[test]
fn test_choices_hold_every_display_name() {
    let ctx = TestContext::new();
    let mut rng = StdRng::seed_from_u64(11);
    let response = options::options(&ctx.state, "Gutter", &mut rng).unwrap();

    assert_eq!(response.choices.len(), response.distractors.len() + 1);
    assert!(response.choices.contains(&"Gutter".to_string()));
    assert!(response.choices.iter().all(|name| !name.contains("(G")));
}

#[test]
fn test_library_options_prefer_premium_list() {
    let ctx = TestContext::with_premium();
    let mut rng = StdRng::seed_from_u64(1);
    let response = options::options(&ctx.state, "Govern the Unaligned", &mut rng).unwrap();

    let names: Vec<&str> = response.distractors.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Conditioning", "Deflection", "Bewitching Oration"]);
}

#[test]
fn test_library_options_without_premium_stay_in_library() {
    let ctx = TestContext::new();
    let mut rng = StdRng::seed_from_u64(3);
    let response = options::options(&ctx.state, "Spying Mission", &mut rng).unwrap();

    assert_eq!(response.population, Population::Library);
    assert!(!response.distractors.is_empty());
    assert!(response.distractors.len() <= 3);
    assert!(response.distractors.iter().all(|c| !c.is_crypt() && c.id != 100005));
}

#[test]
fn test_same_seed_same_options() {
    let ctx = TestContext::new();
    let command = Command::Options {
        card: "Arika".to_string(),
        seed: Some(42),
    };

    let first = execute(&ctx.state, &command).unwrap();
    let second = execute(&ctx.state, &command).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_options_unknown_card() {
    let ctx = TestContext::new();
    let mut rng = StdRng::seed_from_u64(0);
    let err = options::options(&ctx.state, "Nobody", &mut rng).unwrap_err();
    assert!(matches!(err, CliError::NotFound(_)));
}
