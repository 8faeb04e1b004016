//! CLI definitions for chatshare
//!
//! Kept in the library so xtask can generate man pages from the same
//! definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::config::OutputFormat;
use crate::extract::Provider;

/// Version string with build metadata.
///
/// Dev builds append the short git SHA; `release` builds only add the
/// build date.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(build_version)
}

fn build_version() -> String {
    let date = env!("CHATSHARE_BUILD_DATE");
    #[cfg(not(feature = "release"))]
    if let Some(sha) = option_env!("VERGEN_GIT_SHA").filter(|sha| *sha != "unknown") {
        let short = sha.get(..7).unwrap_or(sha);
        return format!("{}-dev+{} (built {})", env!("CARGO_PKG_VERSION"), short, date);
    }
    format!("{} (built {})", env!("CARGO_PKG_VERSION"), date)
}

/// Recover conversations from shared AI-chat pages.
#[derive(Parser, Debug)]
#[command(name = "chatshare")]
#[command(author, version, long_version = long_version())]
#[command(about = "Extract conversation turns from saved AI-chat share pages")]
#[command(
    long_about = "Extract the ordered user/assistant turns from the saved markup of a \
shared ChatGPT, Claude, Gemini, Grok or Perplexity conversation.

Save the page after it has fully rendered (for example with a headless \
browser) and pass the file to `chatshare parse`."
)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the conversation from one saved page
    #[command(long_about = "Extract the conversation from one saved page.

The provider is given directly with --provider, or detected from the page's \
share URL with --url.

EXAMPLES:
    chatshare parse page.html --provider claude
    chatshare parse page.html --url https://chatgpt.com/share/abc --format markdown
    chatshare parse page.html --provider grok -o conversation.json")]
    Parse(ParseArgs),

    /// Extract many saved pages of one provider in parallel
    #[command(long_about = "Extract many saved pages of one provider in parallel.

Each input FILE is written to OUT_DIR under the same stem with a .json or \
.md extension. A failing file does not stop the others; the command exits \
non-zero if any file failed.

EXAMPLE:
    chatshare batch saved/*.html --provider chatgpt --out-dir extracted/")]
    Batch(BatchArgs),

    /// Print the provider a share URL belongs to
    Detect {
        /// Share URL (e.g. https://claude.ai/share/...)
        url: String,
    },

    /// List supported providers
    Providers,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Provider given explicitly or through a share URL.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ProviderSource {
    /// Provider the page was saved from
    #[arg(short, long, value_enum)]
    pub provider: Option<Provider>,

    /// Share URL the page was saved from; used to detect the provider
    #[arg(short, long)]
    pub url: Option<String>,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Saved page (HTML)
    pub file: PathBuf,

    #[command(flatten)]
    pub source: ProviderSource,

    /// Output format (defaults to the config file's setting)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Saved pages (HTML)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Provider all pages were saved from
    #[arg(short, long, value_enum)]
    pub provider: Provider,

    /// Directory for the extracted conversations
    #[arg(long, value_name = "OUT_DIR")]
    pub out_dir: PathBuf,

    /// Output format (defaults to the config file's setting)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
