//! User presence detection.
//!
//! The probe answers raw questions about the machine (idle time, which
//! process owns the foreground window). The state machine turns those
//! answers into an AFK/active state over time.

#[cfg(windows)]
pub mod desktop;
pub mod probe;
pub mod processes;
pub mod state;

pub use probe::*;
pub use processes::*;
pub use state::*;
#[cfg(windows)]
pub use desktop::WindowsProbe;
