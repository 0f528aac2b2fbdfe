//! System resource sampling.
//!
//! CPU and RAM come from `sysinfo`, GPU utilization from NVML when an
//! NVIDIA driver is present. Sampling never fails; a missing GPU reading
//! is `None` and rendered as `N/A`.

pub mod gpu;

pub use gpu::*;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Machine utilization at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemSnapshot {
    /// Global CPU usage since the previous sample, 0-100.
    pub cpu_percent: f32,

    /// GPU utilization, or `None` if unavailable this tick.
    pub gpu_percent: Option<u32>,

    /// Used physical memory in bytes.
    pub ram_used_bytes: u64,

    /// Total physical memory in bytes.
    pub ram_total_bytes: u64,
}

impl SystemSnapshot {
    /// RAM usage as a percentage of total. 0 if the total is unknown.
    pub fn ram_percent(&self) -> f64 {
        if self.ram_total_bytes == 0 {
            0.0
        } else {
            self.ram_used_bytes as f64 / self.ram_total_bytes as f64 * 100.0
        }
    }

    /// GPU utilization as display text: `"42%"` or `"N/A"`.
    pub fn gpu_label(&self) -> String {
        match self.gpu_percent {
            Some(percent) => format!("{percent}%"),
            None => "N/A".to_string(),
        }
    }
}

/// Source of system snapshots.
pub trait StatsProvider {
    /// Takes a fresh snapshot. Must not block for long or fail.
    fn sample(&mut self) -> SystemSnapshot;
}

/// Snapshots of the local machine.
pub struct HostStats {
    system: System,
    gpu: Option<GpuMonitor>,
}

impl HostStats {
    /// Creates the sampler and primes the CPU counters.
    ///
    /// The first CPU reading is relative to this call.
    pub fn new(gpu: Option<GpuMonitor>) -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                .with_memory(MemoryRefreshKind::new().with_ram()),
        );

        Self { system, gpu }
    }
}

impl StatsProvider for HostStats {
    fn sample(&mut self) -> SystemSnapshot {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let gpu_percent = self.gpu.as_ref().and_then(GpuMonitor::utilization);

        SystemSnapshot {
            cpu_percent: self.system.global_cpu_usage().clamp(0.0, 100.0),
            gpu_percent,
            ram_used_bytes: self.system.used_memory(),
            ram_total_bytes: self.system.total_memory(),
        }
    }
}
