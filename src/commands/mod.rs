//! Command handlers for the CLI

pub mod batch;
pub mod completions;
pub mod config;
pub mod detect;
pub mod parse;
pub mod providers;

use anyhow::{Context, Result};
use std::path::Path;

use chatshare::config::OutputFormat;
use chatshare::{to_transcript, Config, ExtractError, Message};

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Serialize messages in the requested format.
pub fn render_messages(messages: &[Message], format: OutputFormat, config: &Config) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(messages).context("Failed to serialize messages")
        }
        OutputFormat::Markdown => Ok(to_transcript(messages, &config.transcript)),
    }
}

/// What to try next after an extraction failure.
pub fn remediation_hint(err: &ExtractError) -> &'static str {
    match err {
        ExtractError::NoTurnsLocated { .. } => {
            "Save the page again after it has fully rendered, or check that the share link is public and the provider is correct."
        }
        ExtractError::AllTurnsEmptyAfterCleaning { .. } => {
            "Only interface text was found; save the page again with a longer render wait."
        }
    }
}
