//! Process-related WinAPI wrappers.
//!
//! Resolves a process ID to its executable file name.

use windows::core::PWSTR;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32,
    PROCESS_QUERY_LIMITED_INFORMATION,
};

/// RAII wrapper for Windows process handles.
///
/// Automatically closes the handle when dropped to prevent handle leaks.
struct ProcessHandle(HANDLE);

impl ProcessHandle {
    /// Opens a process with limited query permission.
    ///
    /// Returns `None` if the process cannot be opened (access denied, or
    /// the process exited after its ID was read).
    fn open(pid: u32) -> Option<Self> {
        let handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) };

        match handle {
            Ok(h) if !h.is_invalid() => Some(Self(h)),
            _ => None,
        }
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Gets the executable file name (e.g. `VRChat.exe`) of a process.
///
/// Returns `None` if the process cannot be opened or its image path
/// cannot be read.
pub fn get_process_name(pid: u32) -> Option<String> {
    let handle = ProcessHandle::open(pid)?;

    let mut buffer: [u16; 1024] = [0; 1024];
    let mut len = buffer.len() as u32;

    unsafe {
        QueryFullProcessImageNameW(
            handle.0,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut len,
        )
        .ok()?;
    }

    let path = String::from_utf16_lossy(&buffer[..len as usize]);
    file_name(&path).map(str::to_string)
}

/// Last component of a Windows image path.
fn file_name(path: &str) -> Option<&str> {
    path.rsplit(['\\', '/']).next().filter(|name| !name.is_empty())
}
