// One-shot membership report — everything the CLI prints, in one struct.

use serde::Serialize;

use super::host::HostInfo;
use super::query::DomainMembershipQuery;
use super::types::MembershipRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainStatusReport {
    pub is_domain_joined: bool,
    pub computer_name: String,
    pub full_name: String,
    /// `None` when workstation info could not be read.
    pub domain_info: Option<MembershipRecord>,
}

/// Run a membership query plus both name lookups and snapshot the result.
pub fn check_domain_status<H: HostInfo>(query: &mut DomainMembershipQuery<H>) -> DomainStatusReport {
    let is_domain_joined = query.query_is_domain_joined();

    DomainStatusReport {
        is_domain_joined,
        computer_name: query.computer_name(),
        full_name: query.fully_qualified_computer_name(),
        domain_info: query.current_record().cloned(),
    }
}

impl DomainStatusReport {
    /// Human-readable report for the terminal.
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();

        out.push_str(&format!("Computer name: {}\n", self.computer_name));
        out.push_str(&format!("Full name:     {}\n\n", self.full_name));
        out.push_str(&format!("{}\n", rule));

        match &self.domain_info {
            Some(record) if self.is_domain_joined => {
                out.push_str("This computer IS joined to a domain\n");
                out.push_str(&format!("  Domain: {}\n", record.name()));
                out.push_str(&format!("\nJoin type: {}\n", record.join_type()));
            }
            Some(record) => {
                out.push_str("This computer is NOT in a domain\n");
                out.push_str(&format!("  Workgroup: {}\n", record.name()));
                out.push_str(&format!("\nJoin type: {}\n", record.join_type()));
            }
            None => {
                out.push_str("Membership could not be determined (see log)\n");
            }
        }

        out.push_str(&rule);
        out
    }
}
