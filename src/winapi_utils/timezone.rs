//! Local time zone name.

use windows::Win32::System::Time::{GetTimeZoneInformation, TIME_ZONE_INFORMATION};

/// `GetTimeZoneInformation` result when daylight saving time is in effect.
const TIME_ZONE_ID_DAYLIGHT: u32 = 2;

/// `GetTimeZoneInformation` failure sentinel.
const TIME_ZONE_ID_INVALID: u32 = u32::MAX;

/// Name of the time zone currently in effect, e.g. `Tokyo Standard Time`
/// or `Central European Summer Time`.
///
/// Returns `None` if the zone cannot be queried or has no name.
pub fn get_time_zone_name() -> Option<String> {
    let mut info = TIME_ZONE_INFORMATION::default();
    let id = unsafe { GetTimeZoneInformation(&mut info) };

    if id == TIME_ZONE_ID_INVALID {
        return None;
    }

    let raw = if id == TIME_ZONE_ID_DAYLIGHT {
        &info.DaylightName
    } else {
        &info.StandardName
    };

    let name = utf16_until_nul(raw);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn utf16_until_nul(raw: &[u16]) -> String {
    let len = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());
    String::from_utf16_lossy(&raw[..len])
}
