//! Time helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

const MS_PER_MINUTE: u64 = 60_000;
const MINUTES_PER_DAY: u64 = 24 * 60;

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Wall-clock hour and minute in 24-hour form.
pub struct ClockTime {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute of hour, `0..=59`.
    pub minute: u32,
}

impl ClockTime {
    /// Builds a clock time, wrapping out-of-range fields into their valid ranges.
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: (hour + minute / 60) % 24,
            minute: minute % 60,
        }
    }

    /// Returns the UTC wall-clock time for a unix millisecond timestamp.
    pub const fn from_unix_ms(unix_ms: u64) -> Self {
        let minute_of_day = (unix_ms / MS_PER_MINUTE) % MINUTES_PER_DAY;
        Self {
            hour: (minute_of_day / 60) as u32,
            minute: (minute_of_day % 60) as u32,
        }
    }

    /// Returns the host-local wall-clock time.
    ///
    /// Native targets have no timezone database here and fall back to UTC.
    pub fn local_now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self::new(date.get_hours(), date.get_minutes())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_unix_ms(unix_time_ms_now())
        }
    }

    /// Formats the time as zero-padded `HH:MM`.
    pub fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_zero_padded_24_hour() {
        assert_eq!(ClockTime::new(9, 5).label(), "09:05");
        assert_eq!(ClockTime::new(23, 59).label(), "23:59");
        assert_eq!(ClockTime::new(0, 0).label(), "00:00");
    }

    #[test]
    fn new_wraps_out_of_range_fields() {
        assert_eq!(ClockTime::new(23, 75), ClockTime::new(0, 15));
        assert_eq!(ClockTime::new(24, 0), ClockTime::new(0, 0));
    }

    #[test]
    fn from_unix_ms_uses_minute_of_day() {
        assert_eq!(ClockTime::from_unix_ms(0).label(), "00:00");
        let ms = ((13 * 60 + 7) * 60 + 42) * 1000;
        assert_eq!(ClockTime::from_unix_ms(ms).label(), "13:07");
        let next_day = ms + 24 * 60 * 60 * 1000;
        assert_eq!(ClockTime::from_unix_ms(next_day).label(), "13:07");
    }
}
