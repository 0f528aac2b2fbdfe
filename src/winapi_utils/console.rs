//! Console setup.

use windows::Win32::System::Console::{
    GetConsoleMode, GetStdHandle, SetConsoleMode, CONSOLE_MODE,
    ENABLE_VIRTUAL_TERMINAL_PROCESSING, STD_OUTPUT_HANDLE,
};

/// Turns on ANSI escape sequence handling for stdout.
///
/// Returns `false` if stdout is not a console (redirected output) or the
/// mode cannot be changed; colors are then printed raw.
pub fn enable_virtual_terminal() -> bool {
    unsafe {
        let Ok(handle) = GetStdHandle(STD_OUTPUT_HANDLE) else {
            return false;
        };

        let mut mode = CONSOLE_MODE::default();
        if GetConsoleMode(handle, &mut mode).is_err() {
            return false;
        }

        if mode.contains(ENABLE_VIRTUAL_TERMINAL_PROCESSING) {
            return true;
        }

        match SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = ?e, "Failed to enable virtual terminal processing");
                false
            }
        }
    }
}
