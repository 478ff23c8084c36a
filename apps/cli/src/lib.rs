pub mod commands;
pub mod config;
pub mod error;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use guess_core::{DataError, InMemoryCatalog, PremiumDistractors, ScoreRules};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;
use crate::config::AppConfig;
use crate::error::{CliError, Result};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Arc<InMemoryCatalog>,
    pub premium: Option<Arc<PremiumDistractors>>,
    pub rules: ScoreRules,
}

impl AppState {
    /// Load data files named by the config. The catalog is skipped when the
    /// command has no use for it.
    pub fn load(config: &AppConfig, with_catalog: bool) -> Result<Self> {
        let catalog = if with_catalog {
            let path = config.card_db()?;
            tracing::info!("Loading card catalog from {}", path.display());
            InMemoryCatalog::from_json(&read(path)?)?
        } else {
            InMemoryCatalog::default()
        };

        let premium = match &config.premium_distractors {
            Some(path) => {
                tracing::info!("Loading premium distractors from {}", path.display());
                Some(read(path)?)
            }
            None => None,
        };

        let rules = match &config.score_rules {
            Some(path) => Some(read(path)?),
            None => None,
        };

        let state = Self::assemble(catalog, premium.as_deref(), rules.as_deref())?;
        tracing::debug!(
            cards = state.catalog.len(),
            premium = state.premium.as_ref().map_or(0, |p| p.len()),
            "state loaded"
        );
        Ok(state)
    }

    /// Build state from in-memory JSON documents.
    pub fn from_sources(
        catalog_json: &str,
        premium_json: Option<&str>,
        rules_json: Option<&str>,
    ) -> Result<Self> {
        let catalog = InMemoryCatalog::from_json(catalog_json)?;
        Self::assemble(catalog, premium_json, rules_json)
    }

    fn assemble(
        catalog: InMemoryCatalog,
        premium_json: Option<&str>,
        rules_json: Option<&str>,
    ) -> Result<Self> {
        let premium = premium_json
            .map(PremiumDistractors::from_json)
            .transpose()?
            .map(Arc::new);

        let rules = match rules_json {
            Some(json) => serde_json::from_str(json).map_err(DataError::from)?,
            None => ScoreRules::default(),
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            premium,
            rules,
        })
    }
}

pub(crate) fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::io(path.display().to_string(), e))
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(
        cli.card_db.clone(),
        cli.premium.clone(),
        cli.score_rules.clone(),
    );

    let state = AppState::load(&config, cli.command.needs_catalog())?;
    let output = commands::execute(&state, &cli.command)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
