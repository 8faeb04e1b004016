//! Platform detection from share URLs.

use url::Url;

use crate::extract::Provider;

/// Hosts serving shared conversations, after `www.` is dropped.
const HOSTS: &[(&str, Provider)] = &[
    ("chatgpt.com", Provider::Chatgpt),
    ("chat.openai.com", Provider::Chatgpt),
    ("gemini.google.com", Provider::Gemini),
    ("claude.ai", Provider::Claude),
    ("grok.com", Provider::Grok),
    ("perplexity.ai", Provider::Perplexity),
];

impl Provider {
    /// Provider whose share page lives at `url`.
    ///
    /// Returns `None` for unparseable URLs and unknown hosts.
    pub fn from_url(url: &str) -> Option<Provider> {
        let parsed = Url::parse(url.trim()).ok()?;
        let host = parsed.host_str()?.to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);
        HOSTS
            .iter()
            .find(|(known, _)| *known == host)
            .map(|(_, provider)| *provider)
    }
}

/// Share hosts recognized for `provider`.
pub fn share_hosts(provider: Provider) -> impl Iterator<Item = &'static str> {
    HOSTS
        .iter()
        .filter(move |(_, p)| *p == provider)
        .map(|(host, _)| *host)
}
