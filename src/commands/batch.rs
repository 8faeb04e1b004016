//! Batch command handler
//!
//! Every file is extracted independently on the rayon pool; one failure
//! never stops the rest.

use anyhow::{anyhow, bail, Context, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chatshare::cli::BatchArgs;
use chatshare::config::OutputFormat;
use chatshare::{Config, Extractor};

use super::{load_config, remediation_hint, render_messages};

/// Output path for every input inside `out_dir`, in input order.
///
/// Outputs are named after the input's file stem. When several inputs share
/// a stem, later ones get `-1`, `-2`, ... appended so no two inputs write
/// the same file.
pub fn output_paths(inputs: &[PathBuf], out_dir: &Path, format: OutputFormat) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "conversation".to_string());
            let mut name = format!("{}.{}", stem, format.extension());
            let mut suffix = 1;
            while !taken.insert(name.clone()) {
                name = format!("{}-{}.{}", stem, suffix, format.extension());
                suffix += 1;
            }
            out_dir.join(name)
        })
        .collect()
}

fn process_file(
    input: &Path,
    out: &Path,
    extractor: &Extractor,
    format: OutputFormat,
    config: &Config,
) -> Result<usize> {
    let doc = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let messages = extractor
        .extract(&doc)
        .map_err(|e| anyhow!("{} ({})", e, remediation_hint(&e)))?;
    let rendered = render_messages(&messages, format, config)?;
    fs::write(out, rendered + "\n").with_context(|| format!("Failed to write {}", out.display()))?;
    Ok(messages.len())
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &BatchArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let format = args.format.unwrap_or(config.output.format);
    let extractor = Extractor::new(args.provider).with_options(config.extract_options(args.provider));

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create directory: {}", args.out_dir.display()))?;

    let outputs = output_paths(&args.files, &args.out_dir, format);
    let results: Vec<(&PathBuf, &PathBuf, Result<usize>)> = args
        .files
        .par_iter()
        .zip(outputs.par_iter())
        .map(|(input, out)| {
            let result = process_file(input, out, &extractor, format, &config);
            (input, out, result)
        })
        .collect();

    let mut failed = 0;
    for (input, out, result) in &results {
        match result {
            Ok(turns) => println!("{}: {} turns -> {}", input.display(), turns, out.display()),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {:#}", input.display(), e);
            }
        }
    }

    let total = results.len();
    println!("Extracted {} of {} files", total - failed, total);
    if failed > 0 {
        bail!("{} of {} files failed", failed, total);
    }
    Ok(())
}
