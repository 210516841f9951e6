// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tracing filter directive used when neither config nor env says otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Where the non-Windows backend looks for Samba/Kerberos state.
    #[serde(default)]
    pub unix: UnixPaths,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "domaincheck=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnixPaths {
    #[serde(default = "default_krb5_conf")]
    pub krb5_conf: PathBuf,
    #[serde(default = "default_keytab")]
    pub keytab: PathBuf,
    #[serde(default = "default_smb_conf")]
    pub smb_conf: PathBuf,
}

impl Default for UnixPaths {
    fn default() -> Self {
        Self {
            krb5_conf: default_krb5_conf(),
            keytab: default_keytab(),
            smb_conf: default_smb_conf(),
        }
    }
}

fn default_krb5_conf() -> PathBuf {
    PathBuf::from("/etc/krb5.conf")
}

fn default_keytab() -> PathBuf {
    PathBuf::from("/etc/krb5.keytab")
}

fn default_smb_conf() -> PathBuf {
    PathBuf::from("/etc/samba/smb.conf")
}
