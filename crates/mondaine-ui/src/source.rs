//! Where the clock gets its time from.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Wall-clock reading shown by the dial. Zone-less; the dial only looks at
/// the calendar fields.
pub type Timestamp = NaiveDateTime;

/// Supplies the current time on each tick.
pub trait TimeSource {
    fn now(&self) -> Timestamp;
}

impl<F> TimeSource for F
where
    F: Fn() -> Timestamp,
{
    #[inline]
    fn now(&self) -> Timestamp {
        self()
    }
}

/// Local wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    #[inline]
    fn now(&self) -> Timestamp {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedTime(pub Timestamp);

impl TimeSource for FixedTime {
    #[inline]
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Settable clock shared between a face and whoever drives it.
///
/// Clones observe the same reading, so a test can keep one handle and hand
/// the other to a `ClockFace`.
#[derive(Debug, Clone)]
pub struct ManualTime(Rc<Cell<Timestamp>>);

impl ManualTime {
    pub fn new(start: Timestamp) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    #[inline]
    pub fn get(&self) -> Timestamp {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, t: Timestamp) {
        self.0.set(t);
    }

    /// Moves the reading forward by `by` (backwards for negative deltas).
    pub fn advance(&self, by: TimeDelta) {
        let t = self.0.get();
        self.0.set(t.checked_add_signed(by).unwrap_or(t));
    }
}

impl TimeSource for ManualTime {
    #[inline]
    fn now(&self) -> Timestamp {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 9, 29)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid time")
    }

    #[test]
    fn manual_time_is_shared_between_clones() {
        let driver = ManualTime::new(at(10, 0, 0));
        let observer = driver.clone();

        driver.advance(TimeDelta::milliseconds(1500));
        assert_eq!(observer.now(), at(10, 0, 1) + TimeDelta::milliseconds(500));

        driver.set(at(3, 0, 0));
        assert_eq!(observer.now(), at(3, 0, 0));
    }

    #[test]
    fn fixed_and_closure_sources() {
        assert_eq!(FixedTime(at(12, 0, 0)).now(), at(12, 0, 0));

        let src = || at(9, 41, 0);
        assert_eq!(TimeSource::now(&src), at(9, 41, 0));
    }

    #[test]
    fn system_time_reads_the_calendar() {
        use chrono::Datelike;
        assert!(SystemTime.now().year() >= 2024);
    }
}
