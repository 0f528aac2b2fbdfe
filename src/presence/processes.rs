//! Process lookup by executable name.

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

/// Cached process list, refreshed on every query.
pub struct ProcessTable {
    system: System,
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    /// Refreshes the process list and checks for an exact name match.
    ///
    /// Processes that exit between enumeration and the name read are
    /// dropped by the refresh, so a race only ever yields `false`.
    pub fn is_running(&mut self, process_name: &str) -> bool {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::new(),
        );

        self.system
            .processes()
            .values()
            .any(|process| process.name() == process_name)
    }
}

/// Case-insensitive executable name comparison, as Windows treats file names.
pub fn name_matches(actual: &str, wanted: &str) -> bool {
    actual.to_lowercase() == wanted.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sysinfo::Pid;

    #[test]
    fn test_name_matches_ignores_case() {
        assert!(name_matches("vrchat.EXE", "VRChat.exe"));
        assert!(name_matches("VRChat.exe", "VRChat.exe"));
        assert!(!name_matches("VRChat.exe.bak", "VRChat.exe"));
        assert!(!name_matches("VRChat", "VRChat.exe"));
    }

    #[test]
    fn test_own_process_is_running() {
        let pid: Pid = sysinfo::get_current_pid().unwrap();
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let own_name = system
            .process(pid)
            .unwrap()
            .name()
            .to_string_lossy()
            .into_owned();

        let mut table = ProcessTable::new();
        assert!(table.is_running(&own_name));
    }

    #[test]
    fn test_unknown_process_not_running() {
        let mut table = ProcessTable::new();
        assert!(!table.is_running("definitely-not-a-real-process-7f3a.exe"));
    }
}
