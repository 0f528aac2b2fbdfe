//! Presence probe backed by the Windows API.

use super::probe::PresenceProbe;
use super::processes::{name_matches, ProcessTable};
use crate::winapi_utils::{get_foreground_process_id, get_idle_duration, get_process_name};

/// Probe for the interactive Windows session.
#[derive(Default)]
pub struct WindowsProbe {
    processes: ProcessTable,
}

impl WindowsProbe {
    /// Creates a probe with an empty process table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresenceProbe for WindowsProbe {
    fn idle_seconds(&mut self) -> f64 {
        match get_idle_duration() {
            Some(idle) => idle.as_secs_f64(),
            None => {
                tracing::debug!("Last input time unavailable, assuming active");
                0.0
            }
        }
    }

    fn is_target_focused(&mut self, process_name: &str) -> bool {
        let Some(pid) = get_foreground_process_id() else {
            return false;
        };

        match get_process_name(pid) {
            Some(name) => name_matches(&name, process_name),
            None => {
                tracing::trace!(pid, "Foreground process vanished or is inaccessible");
                false
            }
        }
    }

    fn is_target_running(&mut self, process_name: &str) -> bool {
        self.processes.is_running(process_name)
    }
}
