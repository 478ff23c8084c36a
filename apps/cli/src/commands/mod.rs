//! Subcommands. Each returns a serializable response that `run()` prints
//! as JSON.

pub mod classify;
pub mod guess;
pub mod options;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use guess_core::{Card, CardCatalog, DataError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::AppState;

#[derive(Debug, Parser)]
#[command(name = "vtes-guess")]
#[command(about = "VTES card guessing engine and deck archetype classifier")]
pub struct Cli {
    /// Card catalog JSON (overrides VTES_CARD_DB)
    #[arg(long, global = true)]
    pub card_db: Option<PathBuf>,
    /// Premium distractor JSON (overrides VTES_PREMIUM_DISTRACTORS)
    #[arg(long, global = true)]
    pub premium: Option<PathBuf>,
    /// Score table JSON (overrides VTES_SCORE_RULES)
    #[arg(long, global = true)]
    pub score_rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a typed guess against a card
    Check {
        /// Card name or id
        #[arg(long)]
        card: String,
        #[arg(long)]
        guess: String,
    },
    /// Points for one correct answer
    Score {
        #[arg(long, default_value_t = 3)]
        difficulty: u8,
        /// Streak before this answer
        #[arg(long, default_value_t = 0)]
        streak: u32,
        #[arg(long)]
        hint: bool,
    },
    /// Multiple-choice options for a card
    Options {
        /// Card name or id
        #[arg(long)]
        card: String,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Detect the archetype of a decklist file
    Classify {
        path: PathBuf,
        /// Sum repeated card lines instead of failing
        #[arg(long)]
        merge: bool,
    },
}

impl Command {
    pub fn needs_catalog(&self) -> bool {
        !matches!(self, Command::Score { .. })
    }
}

/// Run a command and turn its response into JSON.
pub fn execute(state: &AppState, command: &Command) -> Result<serde_json::Value> {
    match command {
        Command::Check { card, guess } => to_json(guess::check(state, card, guess)?),
        Command::Score {
            difficulty,
            streak,
            hint,
        } => to_json(guess::score(state, *difficulty, *streak, *hint)),
        Command::Options { card, seed } => {
            let response = match seed {
                Some(seed) => options::options(state, card, &mut StdRng::seed_from_u64(*seed))?,
                None => options::options(state, card, &mut rand::thread_rng())?,
            };
            to_json(response)
        }
        Command::Classify { path, merge } => {
            let content = crate::read(path)?;
            to_json(classify::classify(state, &content, *merge)?)
        }
    }
}

/// Look a card up by numeric id, then by name.
pub fn find_card<'a>(state: &'a AppState, query: &str) -> Result<&'a Card> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CliError::BadRequest("card must not be empty".to_string()));
    }

    query
        .parse::<i64>()
        .ok()
        .and_then(|id| state.catalog.card_by_id(id))
        .or_else(|| state.catalog.card_by_name(query))
        .ok_or_else(|| CliError::NotFound(format!("card {query}")))
}

fn to_json<T: Serialize>(response: T) -> Result<serde_json::Value> {
    serde_json::to_value(response).map_err(|e| CliError::Data(DataError::from(e)))
}
