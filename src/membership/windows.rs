// Windows backend — NetAPI32 workstation/join queries and GetComputerNameExW.

use std::ffi::{c_void, OsString};
use std::os::windows::ffi::OsStringExt;
use std::ptr;

use windows_sys::core::PWSTR;
use windows_sys::Win32::Foundation::{GetLastError, ERROR_MORE_DATA};
use windows_sys::Win32::NetworkManagement::NetManagement::{
    NetApiBufferFree, NetGetJoinInformation, NetWkstaGetInfo, NETSETUP_JOIN_STATUS,
    WKSTA_INFO_102,
};
use windows_sys::Win32::System::SystemInformation::{
    ComputerNameDnsFullyQualified, ComputerNameNetBIOS, GetComputerNameExW,
    COMPUTER_NAME_FORMAT,
};

use super::host::HostInfo;
use super::types::{JoinInformation, WorkstationInfo};
use crate::config::Settings;
use crate::errors::HostQueryError;

const NERR_SUCCESS: u32 = 0;

/// Information level for `NetWkstaGetInfo` that yields `WKSTA_INFO_102`.
const WKSTA_LEVEL_102: u32 = 102;

/// Owns a buffer allocated by NetAPI32 and releases it on drop.
struct NetBuffer(*mut c_void);

impl Drop for NetBuffer {
    fn drop(&mut self) {
        if !self.0.is_null() {
            // SAFETY: the pointer came from a NetAPI32 allocation and is freed once.
            unsafe {
                NetApiBufferFree(self.0);
            }
        }
    }
}

/// Read a NUL-terminated UTF-16 string.
///
/// # Safety
/// `p` must be null or point to a valid NUL-terminated wide string.
unsafe fn from_wide_ptr(p: *const u16) -> Option<String> {
    if p.is_null() {
        return None;
    }
    let mut len = 0;
    while *p.add(len) != 0 {
        len += 1;
    }
    let wide = std::slice::from_raw_parts(p, len);
    Some(OsString::from_wide(wide).to_string_lossy().into_owned())
}

/// Live local-machine queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsHost;

impl WindowsHost {
    pub fn new() -> Self {
        Self
    }

    pub fn from_settings(_settings: &Settings) -> Self {
        Self
    }

    fn computer_name_ex(
        format: COMPUTER_NAME_FORMAT,
        call: &'static str,
    ) -> Result<String, HostQueryError> {
        let mut size: u32 = 0;
        // SAFETY: a null buffer with size 0 only asks for the required length.
        let ok = unsafe { GetComputerNameExW(format, ptr::null_mut(), &mut size) };
        if ok == 0 {
            let code = unsafe { GetLastError() };
            if code != ERROR_MORE_DATA {
                return Err(HostQueryError::Api { call, code });
            }
        }
        if size == 0 {
            return Err(HostQueryError::malformed(call, "empty name"));
        }

        let mut buf = vec![0u16; size as usize];
        // SAFETY: `buf` holds `size` wide chars, as the previous call requested.
        let ok = unsafe { GetComputerNameExW(format, buf.as_mut_ptr(), &mut size) };
        if ok == 0 {
            let code = unsafe { GetLastError() };
            return Err(HostQueryError::Api { call, code });
        }
        buf.truncate(size as usize);
        Ok(String::from_utf16_lossy(&buf))
    }
}

impl HostInfo for WindowsHost {
    fn workstation_info(&self) -> Result<WorkstationInfo, HostQueryError> {
        const CALL: &str = "NetWkstaGetInfo";

        let mut raw: *mut u8 = ptr::null_mut();
        // SAFETY: a null server name queries the local machine; NetAPI32 allocates `raw`.
        let status = unsafe { NetWkstaGetInfo(ptr::null(), WKSTA_LEVEL_102, &mut raw) };
        let buffer = NetBuffer(raw.cast());
        if status != NERR_SUCCESS {
            return Err(HostQueryError::Api { call: CALL, code: status });
        }
        if buffer.0.is_null() {
            return Err(HostQueryError::malformed(CALL, "null buffer"));
        }

        // SAFETY: level 102 fills the buffer with a WKSTA_INFO_102, alive until `buffer` drops.
        let info = unsafe { &*(buffer.0 as *const WKSTA_INFO_102) };
        let langroup = unsafe { from_wide_ptr(info.wki102_langroup) }
            .ok_or_else(|| HostQueryError::malformed(CALL, "missing langroup"))?;
        let computer_name = unsafe { from_wide_ptr(info.wki102_computername) }.unwrap_or_default();

        Ok(WorkstationInfo {
            langroup,
            computer_name,
            platform_id: info.wki102_platform_id,
            version_major: info.wki102_ver_major,
            version_minor: info.wki102_ver_minor,
        })
    }

    fn join_information(&self) -> Result<JoinInformation, HostQueryError> {
        const CALL: &str = "NetGetJoinInformation";

        let mut name: PWSTR = ptr::null_mut();
        let mut join_status: NETSETUP_JOIN_STATUS = 0;
        // SAFETY: a null server name queries the local machine; NetAPI32 allocates `name`.
        let status = unsafe { NetGetJoinInformation(ptr::null(), &mut name, &mut join_status) };
        let buffer = NetBuffer(name.cast());
        if status != NERR_SUCCESS {
            return Err(HostQueryError::Api { call: CALL, code: status });
        }

        // SAFETY: on success `name` is a NUL-terminated string owned by `buffer`.
        let name = unsafe { from_wide_ptr(buffer.0 as *const u16) }.unwrap_or_default();
        Ok(JoinInformation {
            name,
            status_code: join_status,
        })
    }

    fn computer_name(&self) -> Result<String, HostQueryError> {
        Self::computer_name_ex(ComputerNameNetBIOS, "GetComputerNameExW(NetBIOS)")
    }

    fn fully_qualified_name(&self) -> Result<String, HostQueryError> {
        Self::computer_name_ex(
            ComputerNameDnsFullyQualified,
            "GetComputerNameExW(DnsFullyQualified)",
        )
    }
}
