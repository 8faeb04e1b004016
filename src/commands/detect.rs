//! Detect command handler

use anyhow::{bail, Result};

use chatshare::Provider;

#[cfg(not(tarpaulin_include))]
pub fn handle(url: &str) -> Result<()> {
    match Provider::from_url(url) {
        Some(provider) => {
            println!("{}", provider);
            Ok(())
        }
        None => bail!("Unrecognized share URL: {}", url),
    }
}
