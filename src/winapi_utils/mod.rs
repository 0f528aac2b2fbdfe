//! Safe wrappers around Windows API calls.
//!
//! This module provides safe Rust abstractions over the unsafe WinAPI
//! functions the presence probe and console setup need: foreground window
//! ownership, process image names, last-input time, time zone names and
//! console modes.

pub mod console;
pub mod input;
pub mod process;
pub mod timezone;
pub mod window;

pub use console::*;
pub use input::*;
pub use process::*;
pub use timezone::*;
pub use window::*;
