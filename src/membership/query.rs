// Domain membership query — combines workstation info and join status into a
// cached MembershipRecord.
//
// Every failure degrades to a conservative default plus a log line:
//   join check      -> false
//   join status     -> Unknown
//   computer name   -> "UNKNOWN"
//   FQDN            -> short computer name
//
// A `false` from query_is_domain_joined therefore means either "confirmed
// not in a domain" or "could not tell"; only the log distinguishes them.

use tracing::Span;

use super::host::{HostInfo, SystemHost};
use super::types::{JoinStatus, MembershipRecord};
use crate::config::Settings;

/// Returned by [`DomainMembershipQuery::computer_name`] when the host refuses.
pub const UNKNOWN_COMPUTER_NAME: &str = "UNKNOWN";

pub struct DomainMembershipQuery<H: HostInfo> {
    host: H,
    record: Option<MembershipRecord>,
    span: Span,
}

impl DomainMembershipQuery<SystemHost> {
    /// Query backed by the live operating system.
    pub fn system(settings: &Settings) -> Self {
        Self::new(SystemHost::from_settings(settings))
    }
}

impl<H: HostInfo> DomainMembershipQuery<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            record: None,
            span: tracing::info_span!("domain_membership"),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Query the host and replace the cached record. Returns `is_domain`.
    ///
    /// If workstation info cannot be read, the cached record is left as it was
    /// and `false` is returned.
    pub fn query_is_domain_joined(&mut self) -> bool {
        let info = {
            let _enter = self.span.enter();
            match self.host.workstation_info() {
                Ok(info) => info,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to query workstation info");
                    return false;
                }
            }
        };

        let join_type = self.resolve_join_status();
        let record = MembershipRecord::new(info.langroup, join_type);

        let _enter = self.span.enter();
        tracing::info!(
            join_type = %record.join_type(),
            name = %record.name(),
            "Network membership resolved"
        );

        let is_domain = record.is_domain();
        self.record = Some(record);
        is_domain
    }

    /// Map the host's join-status code to a [`JoinStatus`].
    pub fn resolve_join_status(&self) -> JoinStatus {
        let _enter = self.span.enter();
        match self.host.join_information() {
            Ok(join) => {
                let status = JoinStatus::from_code(join.status_code);
                tracing::debug!(code = join.status_code, status = %status, "Join information");
                status
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not get join information");
                JoinStatus::Unknown
            }
        }
    }

    /// The record from the most recent query, if any.
    pub fn current_record(&self) -> Option<&MembershipRecord> {
        if self.record.is_none() {
            let _enter = self.span.enter();
            tracing::warn!("No membership record yet; call query_is_domain_joined first");
        }
        self.record.as_ref()
    }

    pub fn computer_name(&self) -> String {
        let _enter = self.span.enter();
        match self.host.computer_name() {
            Ok(name) => name,
            Err(e) => {
                tracing::error!(error = %e, "Failed to get computer name");
                UNKNOWN_COMPUTER_NAME.to_string()
            }
        }
    }

    /// DNS fully-qualified name, falling back to the short computer name.
    pub fn fully_qualified_computer_name(&self) -> String {
        let fqdn = {
            let _enter = self.span.enter();
            self.host
                .fully_qualified_name()
                .map_err(|e| tracing::error!(error = %e, "Failed to get FQDN"))
        };
        fqdn.unwrap_or_else(|_| self.computer_name())
    }
}
