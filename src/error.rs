//! Error types.
//!
//! Only startup can fail fatally. Everything that goes wrong once the
//! publish loop is running is logged and absorbed for that tick.

use std::path::PathBuf;

/// Invalid environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Problems loading the status catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("status file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read status file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse status file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("status file {0} has no statuses")]
    Empty(PathBuf),
}

/// OSC transport failures.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not resolve OSC target {0}")]
    Resolve(String),

    #[error("OSC socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OSC encode error: {0:?}")]
    Encode(rosc::OscError),
}

/// NVML initialization failures. Never fatal.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("NVML error: {0}")]
    Nvml(#[from] nvml_wrapper::error::NvmlError),
}

/// Anything that stops the program before the publish loop starts.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Please use a Windows 10+ machine!")]
    UnsupportedPlatform,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
