//! Common test utilities and fixtures for integration tests.
//!
//! Tests build an `AppState` from in-memory JSON, so nothing touches the
//! filesystem or environment.

#![allow(dead_code)]

pub mod fixtures;

use guess_core::ScoreRules;
use vtes_guess_cli::AppState;

/// Test context holding loaded state.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    /// Catalog only, default score table.
    pub fn new() -> Self {
        let state = AppState::from_sources(&fixtures::catalog_json(), None, None)
            .expect("fixture catalog loads");
        Self { state }
    }

    /// Catalog plus curated distractors.
    pub fn with_premium() -> Self {
        let state = AppState::from_sources(
            &fixtures::catalog_json(),
            Some(&fixtures::premium_json()),
            None,
        )
        .expect("fixture catalog loads");
        Self { state }
    }

    /// Catalog with a custom score table.
    pub fn with_rules(rules: &ScoreRules) -> Self {
        let rules = serde_json::to_string(rules).expect("rules serialize");
        let state = AppState::from_sources(&fixtures::catalog_json(), None, Some(&rules))
            .expect("fixture catalog loads");
        Self { state }
    }
}
