//! The sampling and publishing loop.
//!
//! One loop instance owns all long-lived state: the presence state
//! machine, the status rotator and the "connected" announcement flag.
//! Each tick samples the machine, renders the chatbox text and sends it;
//! between ticks the loop sleeps on the shutdown signal so Ctrl+C ends
//! the wait immediately.

pub mod clock;
pub mod payload;
pub mod shutdown;

pub use clock::*;
pub use payload::*;
pub use shutdown::*;

use crate::config::Config;
use crate::presence::{PresenceProbe, PresenceStateMachine};
use crate::stats::StatsProvider;
use crate::status::StatusRotator;
use crate::transport::{OutgoingPayload, Transport};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Lifecycle phase of a [`PublishLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, no tick has run yet.
    Starting,
    /// Target found running; ticking.
    Connected,
    /// Interrupted; sending the clearing payload.
    Disconnecting,
    /// Target process missing; waiting out the grace delay.
    Aborting,
    /// Finished. `run` has returned.
    Stopped,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The shutdown signal was raised.
    Interrupted,
    /// The target process was not running.
    TargetMissing,
}

/// Loop behavior and timing.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopSettings {
    /// Executable name of the target process.
    pub process_name: String,

    /// Minutes of inactivity before the user counts as AFK.
    pub afk_timeout_minutes: f64,

    /// Time between ticks.
    pub update_interval: Duration,

    /// Whether the clock line carries the time zone label.
    pub show_timezone: bool,

    /// Pause after the "not running" notice before stopping.
    pub exit_grace: Duration,

    /// Pause between the disconnect notice and the clearing payload.
    pub disconnect_delay: Duration,

    /// Pause after the clearing payload before stopping.
    pub clear_grace: Duration,
}

impl LoopSettings {
    /// Takes the user-facing settings from `config`; timings keep their defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            process_name: config.process_name.clone(),
            afk_timeout_minutes: config.afk_timeout_minutes,
            update_interval: config.update_interval,
            show_timezone: config.show_timezone,
            ..Self::default()
        }
    }

    /// Short display name of the target, e.g. `VRChat` for `VRChat.exe`.
    pub fn target_label(&self) -> &str {
        self.process_name
            .strip_suffix(".exe")
            .unwrap_or(&self.process_name)
    }
}

impl Default for LoopSettings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            process_name: config.process_name,
            afk_timeout_minutes: config.afk_timeout_minutes,
            update_interval: config.update_interval,
            show_timezone: config.show_timezone,
            exit_grace: Duration::from_millis(1200),
            disconnect_delay: Duration::from_millis(300),
            clear_grace: Duration::from_millis(1200),
        }
    }
}

/// Periodically publishes presence and system stats.
pub struct PublishLoop<P, S, T, R = StdRng> {
    settings: LoopSettings,
    probe: P,
    stats: S,
    transport: T,
    rotator: StatusRotator<R>,
    presence: PresenceStateMachine,
    shutdown: Shutdown,
    phase: Phase,
    announced: bool,
}

impl<P, S, T, R> PublishLoop<P, S, T, R>
where
    P: PresenceProbe,
    S: StatsProvider,
    T: Transport,
    R: Rng,
{
    pub fn new(
        settings: LoopSettings,
        probe: P,
        stats: S,
        transport: T,
        rotator: StatusRotator<R>,
        shutdown: Shutdown,
    ) -> Self {
        let presence = PresenceStateMachine::new(settings.afk_timeout_minutes);
        Self {
            settings,
            probe,
            stats,
            transport,
            rotator,
            presence,
            shutdown,
            phase: Phase::Starting,
            announced: false,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The presence state machine driven by this loop.
    pub fn presence(&self) -> &PresenceStateMachine {
        &self.presence
    }

    /// Runs until interrupted or until the target process disappears.
    pub fn run(&mut self) -> ExitReason {
        tracing::debug!(
            interval_ms = self.settings.update_interval.as_millis(),
            target = %self.settings.process_name,
            "Publish loop started"
        );

        let reason = loop {
            if self.shutdown.is_triggered() {
                break ExitReason::Interrupted;
            }

            if let Some(reason) = self.tick() {
                break reason;
            }

            if self.shutdown.wait_timeout(self.settings.update_interval) {
                break ExitReason::Interrupted;
            }
        };

        if reason == ExitReason::Interrupted {
            self.disconnect();
        }

        self.set_phase(Phase::Stopped);
        reason
    }

    /// One sampling and publish cycle. Returns `Some` when the loop must stop.
    fn tick(&mut self) -> Option<ExitReason> {
        if !self.probe.is_target_running(&self.settings.process_name) {
            return Some(self.abort());
        }

        if !self.announced {
            crate::success!("{} OSC Connected!", self.settings.target_label());
            self.announced = true;
            self.set_phase(Phase::Connected);
        }

        let snapshot = self.stats.sample();
        let sample = self.probe.sample(&self.settings.process_name);

        let now = Utc::now();
        self.presence.update(&sample, now);
        let status_line = self.presence.status_line(&mut self.rotator, now);

        let payload = compose(
            &status_line,
            &snapshot,
            &local_time_label(self.settings.show_timezone),
        );

        // Interrupted mid-tick: leave the send to the clearing payload.
        if self.shutdown.is_triggered() {
            return Some(ExitReason::Interrupted);
        }

        tracing::debug!(
            afk = self.presence.state().is_afk,
            idle_secs = sample.idle_seconds,
            cpu = snapshot.cpu_percent,
            "Publishing status"
        );
        self.publish(&payload);

        None
    }

    /// Waits out the exit grace. A signal during the wait still clears the display.
    fn abort(&mut self) -> ExitReason {
        self.set_phase(Phase::Aborting);
        tracing::error!("{} not running, Exiting.", self.settings.target_label());

        if self.shutdown.wait_timeout(self.settings.exit_grace) {
            ExitReason::Interrupted
        } else {
            ExitReason::TargetMissing
        }
    }

    fn disconnect(&mut self) {
        self.set_phase(Phase::Disconnecting);
        tracing::warn!("Disconnecting from {} OSC...", self.settings.target_label());

        thread::sleep(self.settings.disconnect_delay);
        self.publish(&OutgoingPayload::clear());
        thread::sleep(self.settings.clear_grace);
    }

    fn publish(&mut self, payload: &OutgoingPayload) {
        if let Err(e) = self.transport.send(payload) {
            tracing::warn!(error = %e, "Failed to send status");
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::trace!(from = ?self.phase, to = ?phase, "Publish loop phase change");
            self.phase = phase;
        }
    }
}
