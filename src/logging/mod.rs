// Process-wide tracing setup.
//
// Installed once from main. Output goes to stderr so the report on stdout
// stays machine-readable with --json.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from a config directive; `verbose` forces debug for this crate.
pub fn build_filter(level: &str, verbose: bool) -> Result<EnvFilter> {
    let directive = if verbose {
        format!("{},domaincheck=debug", level)
    } else {
        level.to_string()
    };
    EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", directive, e))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let filter = build_filter(level, verbose)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}
