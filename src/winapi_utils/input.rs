//! Last-input (idle) time.

use std::time::Duration;
use windows::Win32::System::SystemInformation::GetTickCount;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetLastInputInfo, LASTINPUTINFO};

/// Time since the last keyboard or mouse input in the current session.
///
/// Returns `None` if `GetLastInputInfo` fails.
pub fn get_idle_duration() -> Option<Duration> {
    let mut info = LASTINPUTINFO {
        cbSize: std::mem::size_of::<LASTINPUTINFO>() as u32,
        dwTime: 0,
    };

    let ok = unsafe { GetLastInputInfo(&mut info) }.as_bool();
    if !ok {
        return None;
    }

    let now = unsafe { GetTickCount() };
    Some(Duration::from_millis(u64::from(elapsed_ticks(now, info.dwTime))))
}

/// Milliseconds between two `GetTickCount` readings.
///
/// The tick counter wraps every ~49.7 days; wrapping subtraction keeps the
/// result correct across the rollover.
fn elapsed_ticks(now: u32, last_input: u32) -> u32 {
    now.wrapping_sub(last_input)
}
