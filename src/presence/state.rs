//! AFK/active state tracking and status line rendering.

use super::probe::PresenceSample;
use crate::status::StatusRotator;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;

/// Prefix of the status line while the user is active.
pub const ACTIVE_MARKER: &str = "💬";

/// Prefix of the status line while the user is AFK.
pub const AFK_MARKER: &str = "💤";

/// Coarse presence of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Active,
    Afk,
}

/// Presence state carried across ticks.
///
/// `afk_since` is `Some` exactly while `is_afk` is true and holds the
/// moment AFK began.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceState {
    pub is_afk: bool,
    pub afk_since: Option<DateTime<Utc>>,
}

/// Turns presence samples into an AFK/active state.
#[derive(Debug, Clone)]
pub struct PresenceStateMachine {
    afk_timeout_secs: f64,
    state: PresenceState,
}

impl PresenceStateMachine {
    /// Creates a machine in the active state.
    pub fn new(afk_timeout_minutes: f64) -> Self {
        Self {
            afk_timeout_secs: afk_timeout_minutes * 60.0,
            state: PresenceState::default(),
        }
    }

    /// Current presence state.
    pub fn state(&self) -> &PresenceState {
        &self.state
    }

    pub fn presence(&self) -> Presence {
        if self.state.is_afk {
            Presence::Afk
        } else {
            Presence::Active
        }
    }

    /// Whether a sample on its own means the user is away: idle past the
    /// timeout, or the target is not in the foreground.
    pub fn is_away(&self, sample: &PresenceSample) -> bool {
        sample.idle_seconds >= self.afk_timeout_secs || !sample.target_focused
    }

    /// Applies one sample taken at `now` and returns the new presence.
    pub fn update(&mut self, sample: &PresenceSample, now: DateTime<Utc>) -> Presence {
        let away = self.is_away(sample);

        if away {
            if self.state.afk_since.is_none() {
                tracing::debug!(idle_secs = sample.idle_seconds, focused = sample.target_focused, "Now AFK");
                self.state.afk_since = Some(now);
            }
        } else if self.state.is_afk {
            tracing::debug!("Back from AFK");
            self.state.afk_since = None;
        }

        self.state.is_afk = away;
        self.presence()
    }

    /// How long the user has been AFK as of `now`, or `None` while active.
    ///
    /// Clock adjustments that put `now` before the anchor read as zero.
    pub fn afk_duration(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.state
            .afk_since
            .map(|since| (now - since).to_std().unwrap_or_default())
    }

    /// Renders the first line of the outgoing text.
    ///
    /// While active the last picked phrase is reused; a new one is only
    /// rolled when none has been picked yet.
    pub fn status_line<R: Rng>(&self, rotator: &mut StatusRotator<R>, now: DateTime<Utc>) -> String {
        match self.afk_duration(now) {
            Some(afk_for) => format!("{AFK_MARKER} AFK for {}", format_afk_time(afk_for)),
            None => {
                let phrase = match rotator.peek_last() {
                    Some(last) => last.to_string(),
                    None => rotator.pick(),
                };
                format!("{ACTIVE_MARKER} {phrase}")
            }
        }
    }
}

/// Formats an AFK duration as `"<M>m <S>s"`, or `"<S>s"` under a minute.
///
/// Sub-second remainders are truncated.
pub fn format_afk_time(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let minutes = total / 60;
    let seconds = total % 60;

    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusCatalog;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn active() -> PresenceSample {
        PresenceSample {
            idle_seconds: 0.0,
            target_focused: true,
        }
    }

    fn idle(secs: f64) -> PresenceSample {
        PresenceSample {
            idle_seconds: secs,
            target_focused: true,
        }
    }

    fn unfocused() -> PresenceSample {
        PresenceSample {
            idle_seconds: 0.0,
            target_focused: false,
        }
    }

    fn rotator(items: &[&str]) -> StatusRotator<StdRng> {
        let catalog = StatusCatalog::new(items.iter().map(|s| s.to_string()).collect()).unwrap();
        StatusRotator::with_rng(catalog, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_format_afk_time() {
        assert_eq!(format_afk_time(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_afk_time(Duration::from_secs(45)), "45s");
        assert_eq!(format_afk_time(Duration::from_secs(0)), "0s");
        assert_eq!(format_afk_time(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_afk_time(Duration::from_secs(3725)), "62m 5s");
    }

    #[test]
    fn test_format_afk_time_truncates() {
        assert_eq!(format_afk_time(Duration::from_millis(59_999)), "59s");
        assert_eq!(format_afk_time(Duration::from_millis(999)), "0s");
    }

    #[test]
    fn test_initial_state_active() {
        let machine = PresenceStateMachine::new(5.0);
        assert_eq!(machine.presence(), Presence::Active);
        assert_eq!(machine.state(), &PresenceState::default());
    }

    #[test]
    fn test_active_afk_active_sequence() {
        let mut machine = PresenceStateMachine::new(5.0);

        assert_eq!(machine.update(&active(), at(0)), Presence::Active);
        assert_eq!(machine.state().afk_since, None);

        assert_eq!(machine.update(&idle(600.0), at(10)), Presence::Afk);
        assert!(machine.state().is_afk);
        assert_eq!(machine.state().afk_since, Some(at(10)));

        assert_eq!(machine.update(&active(), at(20)), Presence::Active);
        assert!(!machine.state().is_afk);
        assert_eq!(machine.state().afk_since, None);
    }

    #[test]
    fn test_afk_anchor_fixed_while_afk() {
        let mut machine = PresenceStateMachine::new(5.0);
        machine.update(&unfocused(), at(100));

        for tick in 1..10 {
            machine.update(&idle(1000.0 + tick as f64), at(100 + tick * 3));
            assert_eq!(machine.state().afk_since, Some(at(100)));
        }

        assert_eq!(machine.afk_duration(at(165)), Some(Duration::from_secs(65)));
    }

    #[test]
    fn test_new_anchor_after_returning() {
        let mut machine = PresenceStateMachine::new(1.0);
        machine.update(&unfocused(), at(0));
        machine.update(&active(), at(30));
        machine.update(&unfocused(), at(50));
        assert_eq!(machine.state().afk_since, Some(at(50)));
    }

    #[test]
    fn test_idle_threshold_inclusive() {
        let machine = PresenceStateMachine::new(5.0);
        assert!(!machine.is_away(&idle(299.9)));
        assert!(machine.is_away(&idle(300.0)));
        assert!(machine.is_away(&unfocused()));
    }

    #[test]
    fn test_zero_timeout_is_always_away() {
        let machine = PresenceStateMachine::new(0.0);
        assert!(machine.is_away(&active()));
    }

    #[test]
    fn test_afk_status_line() {
        let mut machine = PresenceStateMachine::new(5.0);
        let mut rotator = rotator(&["a", "b"]);

        machine.update(&unfocused(), at(0));
        assert_eq!(machine.status_line(&mut rotator, at(45)), "💤 AFK for 45s");
        assert_eq!(machine.status_line(&mut rotator, at(65)), "💤 AFK for 1m 5s");
        assert_eq!(rotator.peek_last(), None);
    }

    #[test]
    fn test_active_status_line_is_stable() {
        let mut machine = PresenceStateMachine::new(5.0);
        let mut rotator = rotator(&["first", "second", "third"]);

        machine.update(&active(), at(0));
        let line = machine.status_line(&mut rotator, at(0));
        let picked = rotator.peek_last().unwrap().to_string();
        assert_eq!(line, format!("💬 {picked}"));

        for tick in 1..20 {
            machine.update(&active(), at(tick));
            assert_eq!(machine.status_line(&mut rotator, at(tick)), line);
        }
    }

    #[test]
    fn test_phrase_survives_afk_cycle() {
        let mut machine = PresenceStateMachine::new(5.0);
        let mut rotator = rotator(&["first", "second", "third"]);

        machine.update(&active(), at(0));
        let before = machine.status_line(&mut rotator, at(0));

        machine.update(&unfocused(), at(5));
        machine.status_line(&mut rotator, at(5));

        machine.update(&active(), at(10));
        assert_eq!(machine.status_line(&mut rotator, at(10)), before);
    }

    #[test]
    fn test_clock_going_backwards_reads_zero() {
        let mut machine = PresenceStateMachine::new(5.0);
        machine.update(&unfocused(), at(100));
        assert_eq!(machine.afk_duration(at(90)), Some(Duration::ZERO));
    }
}
