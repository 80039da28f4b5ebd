use std::time::{Duration, Instant};

/// A tick delivered by [`Ticker::poll`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Tick {
    /// Zero-based count of delivered ticks.
    pub index: u64,
    /// When the tick was due. Never later than the `now` it was polled with.
    pub scheduled: Instant,
    /// Due ticks that were folded into this one because the loop polled late.
    pub missed: u64,
}

/// Periodic tick subscription.
///
/// The first tick is due immediately on [`start`](Self::start); following
/// ticks are due every `period` after it. A late poll delivers one tick and
/// folds all other due ticks into it, keeping the schedule on its original
/// phase. Nothing is queued, so a stalled loop never replays a backlog.
///
/// The subscription is inert once [`cancel`](Self::cancel)ed.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
    delivered: u64,
    active: bool,
}

impl Ticker {
    /// Smallest accepted period; shorter requests are raised to this.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    /// Starts a subscription whose first tick is due at `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period: period.max(Self::MIN_PERIOD),
            next_due: now,
            delivered: 0,
            active: true,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of ticks delivered so far.
    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// When the next tick becomes due, or `None` once cancelled.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.active.then_some(self.next_due)
    }

    /// Ends the subscription. Idempotent.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Returns a tick if one is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        if !self.active || now < self.next_due {
            return None;
        }

        let late = now.duration_since(self.next_due);
        let missed = (late.as_nanos() / self.period.as_nanos()) as u64;

        let scheduled = self.next_due + self.period_times(missed);
        self.next_due = scheduled + self.period;

        let tick = Tick { index: self.delivered, scheduled, missed };
        self.delivered += 1;
        Some(tick)
    }

    fn period_times(&self, n: u64) -> Duration {
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        self.period.saturating_mul(n)
    }
}
