//! VRCStatus - VRChat chatbox status publisher.
//!
//! Samples CPU/GPU/RAM usage and the user's presence in VRChat, and sends
//! a short status block to the VRChat chatbox over OSC every few seconds.

pub mod config;
pub mod error;
pub mod log;
pub mod presence;
pub mod publish;
pub mod stats;
pub mod status;
pub mod transport;
#[cfg(windows)]
pub mod winapi_utils;
