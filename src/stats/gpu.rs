//! NVIDIA GPU utilization through NVML.

use crate::error::GpuError;
use nvml_wrapper::Nvml;

/// Index of the GPU that is sampled.
const GPU_INDEX: u32 = 0;

/// Handle to an initialized NVML library.
pub struct GpuMonitor {
    nvml: Nvml,
}

impl GpuMonitor {
    /// Loads NVML and checks that the first GPU is reachable.
    ///
    /// Fails on machines without an NVIDIA driver; callers continue
    /// without GPU monitoring.
    pub fn init() -> Result<Self, GpuError> {
        let nvml = Nvml::init()?;
        let device = nvml.device_by_index(GPU_INDEX)?;

        match device.name() {
            Ok(name) => tracing::debug!(gpu = %name, "NVML initialized"),
            Err(e) => tracing::debug!(error = %e, "NVML initialized, GPU name unavailable"),
        }

        Ok(Self { nvml })
    }

    /// Current GPU utilization in percent, or `None` if this query failed.
    pub fn utilization(&self) -> Option<u32> {
        let result = self
            .nvml
            .device_by_index(GPU_INDEX)
            .and_then(|device| device.utilization_rates());

        match result {
            Ok(rates) => Some(rates.gpu),
            Err(e) => {
                tracing::debug!(error = %e, "GPU utilization query failed");
                None
            }
        }
    }
}
