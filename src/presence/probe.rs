//! Presence probe interface.

/// One tick's worth of presence information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceSample {
    /// Seconds since the last keyboard or mouse input.
    pub idle_seconds: f64,

    /// Whether the target process owns the foreground window.
    pub target_focused: bool,
}

/// OS queries the publish loop needs to decide presence.
///
/// Implementations must not fail: a process that vanishes mid-query or a
/// foreground window that cannot be resolved is reported as `false`.
pub trait PresenceProbe {
    /// Seconds since the last user input anywhere on the machine.
    fn idle_seconds(&mut self) -> f64;

    /// True if the foreground window belongs to a process named
    /// `process_name`, compared case-insensitively.
    fn is_target_focused(&mut self, process_name: &str) -> bool;

    /// True if any running process is named `process_name`.
    fn is_target_running(&mut self, process_name: &str) -> bool;

    /// Takes a full presence sample for the target.
    fn sample(&mut self, process_name: &str) -> PresenceSample {
        PresenceSample {
            idle_seconds: self.idle_seconds(),
            target_focused: self.is_target_focused(process_name),
        }
    }
}
