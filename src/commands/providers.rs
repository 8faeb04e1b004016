//! Providers command handler

use anyhow::Result;

use chatshare::platform::share_hosts;
use chatshare::Provider;

#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    for provider in Provider::ALL {
        let hosts: Vec<&str> = share_hosts(provider).collect();
        let profile = provider.profile();
        println!(
            "{:<12} {:<32} fallback: {}",
            provider.as_str(),
            hosts.join(", "),
            profile.fallback.name()
        );
    }
    Ok(())
}
