// Membership types — join status labels and the cached membership record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Join state as reported by the host's join-information call.
///
/// Mirrors `NETSETUP_JOIN_STATUS`; codes outside the known range fail closed
/// to [`JoinStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinStatus {
    Unknown,
    Unjoined,
    Workgroup,
    Domain,
}

impl JoinStatus {
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => JoinStatus::Unjoined,
            2 => JoinStatus::Workgroup,
            3 => JoinStatus::Domain,
            _ => JoinStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JoinStatus::Unknown => "Unknown",
            JoinStatus::Unjoined => "Unjoined",
            JoinStatus::Workgroup => "Workgroup",
            JoinStatus::Domain => "Domain",
        }
    }
}

impl From<i32> for JoinStatus {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for JoinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of one membership query.
///
/// `is_domain` is derived from `join_type` at construction and the fields are
/// private, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipRecord {
    name: String,
    is_domain: bool,
    join_type: JoinStatus,
}

impl MembershipRecord {
    pub fn new(name: impl Into<String>, join_type: JoinStatus) -> Self {
        Self {
            name: name.into(),
            is_domain: join_type == JoinStatus::Domain,
            join_type,
        }
    }

    /// Workgroup or domain display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_domain(&self) -> bool {
        self.is_domain
    }

    pub fn join_type(&self) -> JoinStatus {
        self.join_type
    }
}

/// Fields of `WKSTA_INFO_102` (or the local equivalent) the query relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkstationInfo {
    /// Workgroup or domain the workstation belongs to.
    pub langroup: String,
    pub computer_name: String,
    pub platform_id: u32,
    pub version_major: u32,
    pub version_minor: u32,
}

impl WorkstationInfo {
    /// Info carrying only a langroup, with the remaining fields zeroed.
    pub fn with_langroup(langroup: impl Into<String>) -> Self {
        Self {
            langroup: langroup.into(),
            computer_name: String::new(),
            platform_id: 0,
            version_major: 0,
            version_minor: 0,
        }
    }
}

/// Result of the join-information call: the joined name plus the raw code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinInformation {
    pub name: String,
    pub status_code: i32,
}
