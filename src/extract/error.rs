//! Extraction errors.

use super::types::Provider;

/// Document-level failures of a parse attempt.
///
/// Both are terminal for the document. The usual remedy is to fetch the
/// page again with a longer render wait before taking the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("No conversation turns located in {provider} page (login wall or page not fully rendered?)")]
    NoTurnsLocated { provider: Provider },

    #[error("All {candidates} {provider} turns were empty after cleaning")]
    AllTurnsEmptyAfterCleaning { provider: Provider, candidates: usize },
}

impl ExtractError {
    pub fn provider(&self) -> Provider {
        match self {
            ExtractError::NoTurnsLocated { provider }
            | ExtractError::AllTurnsEmptyAfterCleaning { provider, .. } => *provider,
        }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;
