// domaincheck - domain vs. workgroup membership report
// Library exports

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod membership;

pub use errors::HostQueryError;
pub use membership::{
    check_domain_status, DomainMembershipQuery, DomainStatusReport, HostInfo, JoinStatus,
    MembershipRecord,
};
