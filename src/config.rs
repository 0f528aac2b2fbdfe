//! Runtime configuration read from environment variables.
//!
//! Every setting has a default so the program runs with no environment at
//! all. Values that are present but unusable are rejected at startup.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default OSC listener host (VRChat listens on localhost).
pub const DEFAULT_OSC_HOST: &str = "127.0.0.1";

/// Default VRChat OSC input port.
pub const DEFAULT_OSC_PORT: u16 = 9000;

/// Default OSC address for chatbox text.
pub const DEFAULT_OSC_PATH: &str = "/chatbox/input";

/// Default AFK timeout in minutes.
pub const DEFAULT_AFK_TIMEOUT_MINUTES: f64 = 5.0;

/// Default seconds between status updates.
pub const DEFAULT_UPDATE_INTERVAL_SECS: f64 = 3.0;

/// Default executable name of the target process.
pub const DEFAULT_PROCESS_NAME: &str = "VRChat.exe";

/// Default status catalog file.
pub const DEFAULT_STATUS_FILE: &str = "statuses.yaml";

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Host the OSC datagrams are sent to.
    pub osc_host: String,

    /// Port the OSC datagrams are sent to.
    pub osc_port: u16,

    /// OSC address path of every message.
    pub osc_path: String,

    /// Minutes of input inactivity before the user counts as AFK.
    pub afk_timeout_minutes: f64,

    /// Time between two ticks of the publish loop.
    pub update_interval: Duration,

    /// Executable name of the process that must be running and focused.
    pub process_name: String,

    /// Path to the YAML status catalog.
    pub status_file: PathBuf,

    /// Version shown in the banner.
    pub version: String,

    /// Whether the clock line carries the time zone label.
    pub show_timezone: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            osc_host: DEFAULT_OSC_HOST.to_string(),
            osc_port: DEFAULT_OSC_PORT,
            osc_path: DEFAULT_OSC_PATH.to_string(),
            afk_timeout_minutes: DEFAULT_AFK_TIMEOUT_MINUTES,
            update_interval: Duration::from_secs_f64(DEFAULT_UPDATE_INTERVAL_SECS),
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            status_file: PathBuf::from(DEFAULT_STATUS_FILE),
            version: env!("CARGO_PKG_VERSION").to_string(),
            show_timezone: true,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(host) = get("OSC_HOST") {
            config.osc_host = host;
        }

        if let Some(raw) = get("OSC_PORT") {
            config.osc_port = match raw.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(invalid("OSC_PORT", raw, "expected a port between 1 and 65535")),
            };
        }

        if let Some(path) = get("OSC_PATH") {
            if !path.starts_with('/') {
                return Err(invalid("OSC_PATH", path, "OSC addresses start with '/'"));
            }
            config.osc_path = path;
        }

        if let Some(raw) = get("AFK_TIMEOUT") {
            config.afk_timeout_minutes = match raw.parse::<f64>() {
                Ok(minutes) if minutes.is_finite() && minutes >= 0.0 => minutes,
                _ => return Err(invalid("AFK_TIMEOUT", raw, "expected a non-negative number of minutes")),
            };
        }

        if let Some(raw) = get("UPDATE_INTERVAL") {
            let interval = raw
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs > 0.0)
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok());
            config.update_interval = match interval {
                Some(interval) => interval,
                None => return Err(invalid("UPDATE_INTERVAL", raw, "expected a positive number of seconds")),
            };
        }

        if let Some(name) = get("PROCESS_NAME") {
            config.process_name = name;
        }

        if let Some(file) = get("STATUS_FILE") {
            config.status_file = PathBuf::from(file);
        }

        if let Some(version) = get("VERSION") {
            config.version = version;
        }

        if let Some(raw) = get("SHOW_TIMEZONE") {
            config.show_timezone = parse_bool(&raw)
                .ok_or_else(|| invalid("SHOW_TIMEZONE", raw, "expected true or false"))?;
        }

        Ok(config)
    }

    /// Resolves the status file location.
    ///
    /// Absolute paths and paths that exist relative to the working directory
    /// are used as-is. Otherwise the file is looked up in the user config
    /// directory (`%APPDATA%\vrcstatus` on Windows). When neither exists the
    /// requested path is returned so the load error names what was asked for.
    pub fn resolve_status_file(&self) -> PathBuf {
        resolve_in(&self.status_file, dirs::config_dir().as_deref())
    }

    /// The `host:port` string of the OSC target.
    pub fn osc_target(&self) -> String {
        format!("{}:{}", self.osc_host, self.osc_port)
    }
}

fn resolve_in(path: &Path, config_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }

    if let Some(dir) = config_dir {
        let candidate = dir.join("vrcstatus").join(path);
        if candidate.exists() {
            return candidate;
        }
    }

    path.to_path_buf()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &'static str, value: String, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue { key, value, reason }
}
