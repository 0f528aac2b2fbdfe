//! Local time label for the payload.

use chrono::{Local, NaiveTime, Offset};

/// Current local time, e.g. `21:04:55 Tokyo Standard Time (UTC+9)`.
///
/// Without `show_timezone` only `HH:MM:SS` is returned.
pub fn local_time_label(show_timezone: bool) -> String {
    let now = Local::now();

    if !show_timezone {
        return format_clock(now.time(), None, None);
    }

    let offset_secs = now.offset().fix().local_minus_utc();
    format_clock(now.time(), zone_name().as_deref(), Some(offset_secs))
}

/// Formats a time with an optional zone name and UTC offset.
///
/// The offset is shown in whole hours, rounded down, so `-03:30` reads
/// `UTC-4`.
pub fn format_clock(time: NaiveTime, zone: Option<&str>, offset_secs: Option<i32>) -> String {
    let mut label = time.format("%H:%M:%S").to_string();

    if let Some(zone) = zone {
        label.push(' ');
        label.push_str(zone);
    }

    if let Some(offset) = offset_secs {
        let hours = offset.div_euclid(3600);
        label.push_str(&format!(" (UTC{hours:+})"));
    }

    label
}

#[cfg(windows)]
fn zone_name() -> Option<String> {
    crate::winapi_utils::get_time_zone_name()
}

#[cfg(not(windows))]
fn zone_name() -> Option<String> {
    None
}
