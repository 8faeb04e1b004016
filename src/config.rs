//! Configuration file handling.
//!
//! Lives at `<config dir>/chatshare/config.toml`. Every section is optional;
//! a missing file means defaults everywhere.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::{ExtractOptions, Provider};
use crate::transcript::TranscriptOptions;

/// Output format for extracted conversations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[{"role": ..., "text": ...}]`
    #[default]
    Json,
    /// Markdown transcript with quoted context
    Markdown,
}

impl OutputFormat {
    /// File extension used when writing to a directory.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Markdown => f.write_str("markdown"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Per-provider overrides on top of the built-in profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Extra exact strings dropped as interface noise
    pub extra_noise: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_user_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_assistant_len: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub transcript: TranscriptOptions,
    /// Keyed by provider name (`chatgpt`, `claude`, ...)
    pub providers: BTreeMap<String, ProviderConfig>,
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("chatshare").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Extraction overrides configured for `provider`.
    pub fn extract_options(&self, provider: Provider) -> ExtractOptions {
        match self.providers.get(provider.as_str()) {
            Some(p) => ExtractOptions {
                extra_noise: p.extra_noise.clone(),
                min_user_len: p.min_user_len,
                min_assistant_len: p.min_assistant_len,
            },
            None => ExtractOptions::default(),
        }
    }
}
