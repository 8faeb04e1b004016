//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use chatshare::Config;

use super::load_config;

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

/// Print the path the config is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(config_path)?.display());
    Ok(())
}

/// Write a config file with default settings.
///
/// Refuses to replace an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(config_path)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}\nUse --force to overwrite it.",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
