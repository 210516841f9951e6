// Membership module — is this host in a Windows domain or a workgroup?
//
// DomainMembershipQuery talks to the host through the HostInfo trait:
//   - WindowsHost: NetWkstaGetInfo / NetGetJoinInformation / GetComputerNameExW
//   - UnixHost:    hostname + smb.conf / krb5.conf / keytab
//
// Results are cached as a MembershipRecord on the query instance.

pub mod host;
pub mod query;
pub mod report;
pub mod types;

#[cfg(not(windows))]
pub mod unix;
#[cfg(windows)]
pub mod windows;

pub use host::{HostInfo, SystemHost};
pub use query::{DomainMembershipQuery, UNKNOWN_COMPUTER_NAME};
pub use report::{check_domain_status, DomainStatusReport};
pub use types::{JoinInformation, JoinStatus, MembershipRecord, WorkstationInfo};

#[cfg(not(windows))]
pub use unix::UnixHost;
#[cfg(windows)]
pub use windows::WindowsHost;
