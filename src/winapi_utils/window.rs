//! Foreground window wrappers.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{GetForegroundWindow, GetWindowThreadProcessId};

/// Gets the handle of the currently focused (foreground) window.
///
/// Returns `None` if no window has focus (e.g., desktop is focused, the
/// workstation is locked, or focus is mid-switch).
pub fn get_foreground_window() -> Option<HWND> {
    let hwnd = unsafe { GetForegroundWindow() };
    if hwnd.0.is_null() {
        None
    } else {
        Some(hwnd)
    }
}

/// Gets the ID of the process that owns a window.
///
/// Returns `None` if the window has already been destroyed.
pub fn get_window_process_id(hwnd: HWND) -> Option<u32> {
    let mut process_id: u32 = 0;
    let thread_id = unsafe { GetWindowThreadProcessId(hwnd, Some(&mut process_id)) };

    if thread_id == 0 || process_id == 0 {
        None
    } else {
        Some(process_id)
    }
}

/// Gets the ID of the process owning the foreground window.
pub fn get_foreground_process_id() -> Option<u32> {
    get_foreground_window().and_then(get_window_process_id)
}
