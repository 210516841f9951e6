// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{default_config_path, load_config, LOG_ENV_VAR};
pub use settings::{LoggingConfig, OutputConfig, OutputFormat, Settings, UnixPaths, DEFAULT_LOG_LEVEL};
