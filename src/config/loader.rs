// Configuration loader
// Reads ~/.domaincheck/config.toml (or an explicit path) and applies env overrides

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Settings;

/// Overrides `logging.level` when set and non-empty.
pub const LOG_ENV_VAR: &str = "DOMAINCHECK_LOG";

/// Load settings.
///
/// An explicit `path` must exist and parse. Without one, the default location
/// is tried and built-in defaults are used if nothing is there.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => load_from_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_file(&path)?,
            _ => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, std::env::var(LOG_ENV_VAR).ok());
    Ok(settings)
}

/// `~/.domaincheck/config.toml`, if a home directory can be found.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".domaincheck").join("config.toml"))
}

fn load_from_file(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(settings)
}

fn apply_env_overrides(settings: &mut Settings, log_level: Option<String>) {
    if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
        settings.logging.level = level;
    }
}
