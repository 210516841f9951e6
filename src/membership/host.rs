// Host information capability — the OS-facing side of a membership query.

use super::types::{JoinInformation, WorkstationInfo};
use crate::errors::HostQueryError;

/// The four platform calls a membership query needs.
///
/// `WindowsHost` answers them from NetAPI32; `UnixHost` approximates them from
/// the hostname and local Samba/Kerberos configuration. Tests supply fakes.
pub trait HostInfo {
    /// Workstation info; `langroup` names the workgroup or domain.
    fn workstation_info(&self) -> Result<WorkstationInfo, HostQueryError>;

    /// Join information with the raw join-status code.
    fn join_information(&self) -> Result<JoinInformation, HostQueryError>;

    /// Short (NetBIOS-style) computer name.
    fn computer_name(&self) -> Result<String, HostQueryError>;

    /// DNS fully-qualified computer name.
    fn fully_qualified_name(&self) -> Result<String, HostQueryError>;
}

impl<T: HostInfo + ?Sized> HostInfo for &T {
    fn workstation_info(&self) -> Result<WorkstationInfo, HostQueryError> {
        (**self).workstation_info()
    }

    fn join_information(&self) -> Result<JoinInformation, HostQueryError> {
        (**self).join_information()
    }

    fn computer_name(&self) -> Result<String, HostQueryError> {
        (**self).computer_name()
    }

    fn fully_qualified_name(&self) -> Result<String, HostQueryError> {
        (**self).fully_qualified_name()
    }
}

impl<T: HostInfo + ?Sized> HostInfo for Box<T> {
    fn workstation_info(&self) -> Result<WorkstationInfo, HostQueryError> {
        (**self).workstation_info()
    }

    fn join_information(&self) -> Result<JoinInformation, HostQueryError> {
        (**self).join_information()
    }

    fn computer_name(&self) -> Result<String, HostQueryError> {
        (**self).computer_name()
    }

    fn fully_qualified_name(&self) -> Result<String, HostQueryError> {
        (**self).fully_qualified_name()
    }
}

/// Backend for the platform this binary was built for.
#[cfg(windows)]
pub type SystemHost = super::windows::WindowsHost;

/// Backend for the platform this binary was built for.
#[cfg(not(windows))]
pub type SystemHost = super::unix::UnixHost;
