//! Development tasks for chatshare
//!
//! Usage: `cargo run -p xtask -- man [--out-dir DIR]`

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use chatshare::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for chatshare and its subcommands
    Man {
        /// Directory to write the pages to
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    write_page(&cmd, "chatshare", out_dir)?;
    for sub in cmd.get_subcommands() {
        let name = format!("chatshare-{}", sub.get_name());
        write_page(sub, &name, out_dir)?;
    }
    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(cmd: &clap::Command, name: &str, out_dir: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .title(name)
        .render(&mut buffer)?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
