//! Chatbox text composition.

use crate::stats::SystemSnapshot;
use crate::transport::OutgoingPayload;

/// Builds the three-line chatbox payload:
///
/// ```text
/// 💬 Vibing
/// CPU: 12% | GPU: 40% | RAM: 55%
/// My Time: 21:04:55 Tokyo Standard Time (UTC+9)
/// ```
pub fn compose(status_line: &str, snapshot: &SystemSnapshot, time_label: &str) -> OutgoingPayload {
    OutgoingPayload::new(format!(
        "{status_line}\nCPU: {:.0}% | GPU: {} | RAM: {:.0}%\nMy Time: {time_label}",
        snapshot.cpu_percent,
        snapshot.gpu_label(),
        snapshot.ram_percent(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_compose_with_gpu() {
        let snapshot = SystemSnapshot {
            cpu_percent: 12.4,
            gpu_percent: Some(40),
            ram_used_bytes: 11 * GIB,
            ram_total_bytes: 20 * GIB,
        };

        let payload = compose("💬 Vibing", &snapshot, "21:04:55 Tokyo Standard Time (UTC+9)");

        assert_eq!(
            payload.text,
            "💬 Vibing\nCPU: 12% | GPU: 40% | RAM: 55%\nMy Time: 21:04:55 Tokyo Standard Time (UTC+9)"
        );
        assert!(payload.immediate);
    }

    #[test]
    fn test_compose_without_gpu() {
        let snapshot = SystemSnapshot {
            cpu_percent: 99.7,
            gpu_percent: None,
            ram_used_bytes: 2 * GIB,
            ram_total_bytes: 3 * GIB,
        };

        let payload = compose("💤 AFK for 1m 5s", &snapshot, "10:00:00");
        let lines: Vec<&str> = payload.text.lines().collect();

        assert_eq!(lines[0], "💤 AFK for 1m 5s");
        assert_eq!(lines[1], "CPU: 100% | GPU: N/A | RAM: 67%");
        assert_eq!(lines[2], "My Time: 10:00:00");
    }
}
