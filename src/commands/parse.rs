//! Parse command handler

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;

use chatshare::cli::{ParseArgs, ProviderSource};
use chatshare::{Extractor, Provider};

use super::{load_config, remediation_hint, render_messages};

/// Provider named on the command line or detected from the share URL.
pub fn resolve_provider(source: &ProviderSource) -> Result<Provider> {
    if let Some(provider) = source.provider {
        return Ok(provider);
    }
    match source.url.as_deref() {
        Some(url) => Provider::from_url(url).ok_or_else(|| {
            anyhow!(
                "Could not detect provider from URL: {}\nUse --provider to name it explicitly.",
                url
            )
        }),
        None => bail!("Either --provider or --url is required"),
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ParseArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let provider = resolve_provider(&args.source)?;

    if !args.file.exists() {
        bail!("File not found: {}", args.file.display());
    }
    let doc = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let extractor = Extractor::new(provider).with_options(config.extract_options(provider));
    let messages = extractor.extract(&doc).map_err(|e| {
        anyhow!(
            "{}: {}\nHint: {}",
            args.file.display(),
            e,
            remediation_hint(&e)
        )
    })?;
    tracing::info!(%provider, turns = messages.len(), "extracted conversation");

    let format = args.format.unwrap_or(config.output.format);
    let rendered = render_messages(&messages, format, &config)?;

    match &args.output {
        Some(path) => fs::write(path, rendered + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}
