//! Per-run overrides layered on top of a provider profile.

/// Options for a single extraction run.
///
/// The static provider profile supplies the defaults; these only add to or
/// replace individual settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Additional exact strings to treat as interface noise
    pub extra_noise: Vec<String>,
    /// Replace the profile's minimum cleaned length for user turns
    pub min_user_len: Option<usize>,
    /// Replace the profile's minimum cleaned length for assistant turns
    pub min_assistant_len: Option<usize>,
}

impl ExtractOptions {
    pub fn with_extra_noise<I, S>(mut self, noise: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_noise.extend(noise.into_iter().map(Into::into));
        self
    }
}
