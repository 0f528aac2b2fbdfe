//! VRCStatus - VRChat chatbox status publisher.
//!
//! Loads configuration and the status catalog, then runs the publish loop
//! until Ctrl+C or until VRChat exits.

use std::process::ExitCode;
use vrcstatus::error::StartupError;

fn main() -> ExitCode {
    #[cfg(windows)]
    let ansi = vrcstatus::winapi_utils::enable_virtual_terminal();
    #[cfg(not(windows))]
    let ansi = true;

    vrcstatus::log::init(ansi);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(windows))]
fn run() -> Result<(), StartupError> {
    Err(StartupError::UnsupportedPlatform)
}

#[cfg(windows)]
fn run() -> Result<(), StartupError> {
    use vrcstatus::config::Config;
    use vrcstatus::presence::WindowsProbe;
    use vrcstatus::publish::{ExitReason, LoopSettings, PublishLoop, Shutdown};
    use vrcstatus::stats::{GpuMonitor, HostStats};
    use vrcstatus::status::{StatusCatalog, StatusRotator};
    use vrcstatus::transport::OscClient;

    let config = Config::from_env()?;
    let catalog = StatusCatalog::load(&config.resolve_status_file())?;
    let client = OscClient::connect(&config.osc_host, config.osc_port, &config.osc_path)?;

    let gpu = match GpuMonitor::init() {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            tracing::debug!(error = %e, "GPU monitoring disabled");
            None
        }
    };

    print_banner(&config.version);

    tracing::info!("OSC target: {}", config.osc_target());
    tracing::info!("AFK timeout: {} minutes", config.afk_timeout_minutes);
    tracing::info!("Update interval: {}s", config.update_interval.as_secs_f64());

    if gpu.is_some() {
        vrcstatus::success!("GPU monitoring enabled");
    } else {
        tracing::warn!("GPU monitoring unavailable");
    }

    let shutdown = Shutdown::new();
    let shutdown_ctrlc = shutdown.clone();
    ctrlc::set_handler(move || shutdown_ctrlc.trigger())?;

    let mut publish = PublishLoop::new(
        LoopSettings::from_config(&config),
        WindowsProbe::new(),
        HostStats::new(gpu),
        client,
        StatusRotator::new(catalog),
        shutdown,
    );

    match publish.run() {
        ExitReason::Interrupted => tracing::debug!("Stopped by user"),
        ExitReason::TargetMissing => tracing::debug!("Stopped, target process gone"),
    }

    Ok(())
}

#[cfg(windows)]
fn print_banner(version: &str) {
    use vrcstatus::log::BANNER_COLOR;

    // Clear screen and home the cursor.
    print!("\x1b[2J\x1b[H");
    println!("{BANNER_COLOR}Welcome to VRCStatus v{version}\x1b[0m");
    println!("{BANNER_COLOR}+----------------------------------------------+\x1b[0m");
    println!();
}
