//! Operator-facing console output.
//!
//! All messages go through `tracing`. This module installs a subscriber
//! whose event formatter prints one colored line per event:
//!
//! ```text
//! [21:04:55] [i] OSC target: 127.0.0.1:9000
//! [21:04:55] [✓] VRChat OSC Connected!
//! ```
//!
//! Info events carrying `success = true` (see [`success!`](crate::success))
//! get the success icon and color.

use chrono::Local;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const RESET: &str = "\x1b[0m";

/// Banner color (256-color orange).
pub const BANNER_COLOR: &str = "\x1b[38;5;208m";

/// Logs an info event rendered as a success line.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        ::tracing::info!(success = true, $($arg)+)
    };
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default `vrcstatus=info` filter.
pub fn init(ansi: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vrcstatus=info")),
        )
        .event_format(ConsoleFormat::new(ansi))
        .init();
}

/// Kind of console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Info,
    Warning,
    Error,
    Success,
    Debug,
}

impl LineKind {
    pub fn from_level(level: Level, success: bool) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warning,
            Level::INFO if success => Self::Success,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "[i]",
            Self::Warning => "[!]",
            Self::Error => "[X]",
            Self::Success => "[✓]",
            Self::Debug => "[?]",
        }
    }

    /// ANSI color prefix; empty for debug lines.
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "\x1b[38;5;39m",
            Self::Warning => "\x1b[38;5;220m",
            Self::Error => "\x1b[38;5;9m",
            Self::Success => "\x1b[38;5;10m",
            Self::Debug => "",
        }
    }
}

/// Event formatter producing `[HH:MM:SS] <icon> <message> key=value...`.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormat {
    ansi: bool,
}

impl ConsoleFormat {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = ConsoleFields::default();
        event.record(&mut fields);

        let kind = LineKind::from_level(*event.metadata().level(), fields.success);
        let timestamp = Local::now().format("%H:%M:%S").to_string();

        writeln!(
            writer,
            "{}",
            render_line(kind, &timestamp, &fields.message, &fields.extra, self.ansi)
        )
    }
}

/// Renders one console line without the trailing newline.
pub fn render_line(
    kind: LineKind,
    timestamp: &str,
    message: &str,
    extra: &[(String, String)],
    ansi: bool,
) -> String {
    let mut line = String::new();

    if ansi {
        line.push_str(kind.color());
    }

    line.push_str(&format!("[{timestamp}] {} {message}", kind.icon()));

    for (key, value) in extra {
        line.push_str(&format!(" {key}={value}"));
    }

    if ansi && !kind.color().is_empty() {
        line.push_str(RESET);
    }

    line
}

/// Collects the message, the success marker and any other fields.
#[derive(Debug, Default)]
struct ConsoleFields {
    message: String,
    success: bool,
    extra: Vec<(String, String)>,
}

impl Visit for ConsoleFields {
    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "success" {
            self.success = value;
        } else {
            self.extra.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.extra.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.extra.push((field.name().to_string(), format!("{value:?}")));
        }
    }
}
