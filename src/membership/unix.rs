// Non-Windows backend — approximates workstation and join information from
// the hostname and local Samba/Kerberos configuration.
//
//   langroup    smb.conf [global] workgroup, else krb5 default_realm, else WORKGROUP
//   join code   3 realm + keytab present, 2 workgroup named, 1 otherwise

use std::fs;
use std::path::{Path, PathBuf};

use super::host::HostInfo;
use super::types::{JoinInformation, WorkstationInfo};
use crate::config::{Settings, UnixPaths};
use crate::errors::HostQueryError;

const DEFAULT_WORKGROUP: &str = "WORKGROUP";

const JOIN_UNJOINED: i32 = 1;
const JOIN_WORKGROUP: i32 = 2;
const JOIN_DOMAIN: i32 = 3;

#[derive(Debug, Clone)]
pub struct UnixHost {
    krb5_conf: PathBuf,
    keytab: PathBuf,
    smb_conf: PathBuf,
}

impl UnixHost {
    pub fn new(paths: &UnixPaths) -> Self {
        Self {
            krb5_conf: paths.krb5_conf.clone(),
            keytab: paths.keytab.clone(),
            smb_conf: paths.smb_conf.clone(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.unix)
    }

    fn hostname(call: &'static str) -> Result<String, HostQueryError> {
        hostname::get()
            .map_err(|e| HostQueryError::io(call, e))?
            .into_string()
            .map_err(|_| HostQueryError::malformed(call, "hostname is not valid UTF-8"))
    }

    fn default_realm(&self) -> Option<String> {
        read_ini_value(&self.krb5_conf, "libdefaults", "default_realm")
    }

    fn workgroup(&self) -> Option<String> {
        read_ini_value(&self.smb_conf, "global", "workgroup")
    }
}

impl HostInfo for UnixHost {
    fn workstation_info(&self) -> Result<WorkstationInfo, HostQueryError> {
        let langroup = self
            .workgroup()
            .or_else(|| self.default_realm())
            .unwrap_or_else(|| DEFAULT_WORKGROUP.to_string());
        let computer_name = self.computer_name()?;

        Ok(WorkstationInfo {
            langroup,
            computer_name,
            ..WorkstationInfo::with_langroup("")
        })
    }

    fn join_information(&self) -> Result<JoinInformation, HostQueryError> {
        if let Some(realm) = self.default_realm() {
            if self.keytab.exists() {
                return Ok(JoinInformation {
                    name: realm,
                    status_code: JOIN_DOMAIN,
                });
            }
            tracing::debug!(
                keytab = %self.keytab.display(),
                "Kerberos realm configured but no keytab; not treating host as joined"
            );
        }

        Ok(match self.workgroup() {
            Some(name) => JoinInformation {
                name,
                status_code: JOIN_WORKGROUP,
            },
            None => JoinInformation {
                name: String::new(),
                status_code: JOIN_UNJOINED,
            },
        })
    }

    fn computer_name(&self) -> Result<String, HostQueryError> {
        let host = Self::hostname("hostname")?;
        let short = host.split('.').next().unwrap_or_default();
        if short.is_empty() {
            return Err(HostQueryError::malformed("hostname", "empty hostname"));
        }
        Ok(short.to_string())
    }

    fn fully_qualified_name(&self) -> Result<String, HostQueryError> {
        const CALL: &str = "fully qualified hostname";

        let host = Self::hostname(CALL)?;
        if host.contains('.') {
            return Ok(host);
        }
        match self.default_realm() {
            Some(realm) => Ok(format!("{}.{}", host, realm.to_lowercase())),
            None => Err(HostQueryError::malformed(
                CALL,
                format!("'{}' has no domain part and no Kerberos realm is configured", host),
            )),
        }
    }
}

/// Look up `key` inside `[section]` of an INI-style file (smb.conf, krb5.conf).
///
/// Section and key names compare case-insensitively. A missing or unreadable
/// file reads as "not configured".
fn read_ini_value(path: &Path, section: &str, key: &str) -> Option<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "Config file not readable");
            return None;
        }
    };
    parse_ini_value(&contents, section, key)
}

fn parse_ini_value(contents: &str, section: &str, key: &str) -> Option<String> {
    let mut in_section = false;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = name.trim().eq_ignore_ascii_case(section);
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            let v = v.trim();
            if k.trim().eq_ignore_ascii_case(key) && !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }
    None
}
