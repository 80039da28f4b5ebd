use chrono::Timelike;

use crate::source::Timestamp;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Continuous hand positions derived from a timestamp.
///
/// The second hand runs stop-to-go: it rests at 12 for the whole of second 0
/// and covers two seconds of travel during second 1. While it rests, the
/// minute hand moves through the last minute step, so at exactly `hh:mm:00.000`
/// and `hh:mm:01.000` (both read as second `0`) `minute` is one below the
/// integer minute.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeComponents {
    /// `[0, 12)`.
    pub hour: f64,
    /// `[0, 60)`, dipping to `-1.0` at `hh:00:00.000`.
    pub minute: f64,
    /// `[0, 60)`.
    pub second: f64,
}

impl TimeComponents {
    pub fn from_time(t: &Timestamp) -> Self {
        Self::from_fields(
            Some(t.hour()),
            Some(t.minute()),
            Some(t.second()),
            Some(t.nanosecond()),
        )
    }

    /// Builds components from optional calendar fields; missing fields read as 0.
    ///
    /// Nanosecond values past one second (leap-second encoding) are held at
    /// the end of the current second.
    pub fn from_fields(
        hour: Option<u32>,
        minute: Option<u32>,
        second: Option<u32>,
        nanosecond: Option<u32>,
    ) -> Self {
        let hour = hour.unwrap_or(0);
        let minute = minute.unwrap_or(0);
        let whole_second = second.unwrap_or(0);
        let fraction = f64::from(nanosecond.unwrap_or(0).min(999_999_999)) / NANOS_PER_SECOND;

        let second = match whole_second {
            0 => 0.0,
            1 => fraction * 2.0,
            s => f64::from(s) + fraction,
        };

        let minute_adjust = if second == 0.0 { fraction - 1.0 } else { 0.0 };

        Self {
            hour: f64::from(hour % 12) + f64::from(minute) / 60.0,
            minute: f64::from(minute) + minute_adjust,
            second,
        }
    }

    /// Hour hand angle in degrees, clockwise from 3 o'clock.
    #[inline]
    pub fn hour_angle(&self) -> f64 {
        self.hour * 30.0 - 90.0
    }

    #[inline]
    pub fn minute_angle(&self) -> f64 {
        self.minute * 6.0 - 90.0
    }

    #[inline]
    pub fn second_angle(&self) -> f64 {
        self.second * 6.0 - 90.0
    }
}
