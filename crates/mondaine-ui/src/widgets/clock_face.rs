use std::time::{Duration, Instant};

use mondaine_engine::coords::{Rect, Vec2};
use mondaine_engine::paint::Color;
use mondaine_engine::scene::{DrawList, LineCap, Shadow};
use mondaine_engine::time::Ticker;

use crate::dial::{hand_blade, tick_marks, DialGeometry, TimeComponents};
use crate::painter::Painter;
use crate::source::{TimeSource, Timestamp};
use crate::widget::Widget;
use crate::widgets::second_hand::SecondHand;

/// Time between two samples of the time source.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Side of the square the face asks for when nothing constrains it.
pub const NOMINAL_SIZE: f32 = 300.0;

const FACE_COLOR: Color = Color::white();
const TICK_COLOR: Color = Color::black();

fn ring_color() -> Color {
    Color::srgb_gray(0.7)
}

fn hand_color() -> Color {
    Color::srgb_gray(0.2)
}

/// Observer notified with every new reading.
pub type UpdateTimeCallback = Box<dyn FnMut(Timestamp)>;

/// Mutable state of a face. Written only by ticks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockState {
    pub current_time: Timestamp,
}

/// Analog station-clock face.
///
/// While mounted, samples its [`TimeSource`] on every tick of a periodic
/// subscription and repaints the dial: grey ring, white face, 60 tick marks,
/// hour and minute hands, and a [`SecondHand`].
///
/// ```rust,ignore
/// let face = ClockFace::new(SystemTime)
///     .tick_interval(Duration::from_millis(100))
///     .on_update_time(|t| log::trace!("tick {t}"));
/// ```
pub struct ClockFace {
    state: ClockState,
    source: Box<dyn TimeSource>,
    on_update_time: Option<UpdateTimeCallback>,
    tick_interval: Duration,
    subscription: Option<Ticker>,
}

impl ClockFace {
    /// Creates an unmounted face already showing `source.now()`.
    pub fn new(source: impl TimeSource + 'static) -> Self {
        Self::from_source(Box::new(source))
    }

    /// Like [`new`](Self::new), for a source that is already boxed.
    pub fn from_source(source: Box<dyn TimeSource>) -> Self {
        let current_time = source.now();
        Self {
            state: ClockState { current_time },
            source,
            on_update_time: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            subscription: None,
        }
    }

    /// Registers the observer called once per tick, after the state update.
    pub fn on_update_time(mut self, f: impl FnMut(Timestamp) + 'static) -> Self {
        self.on_update_time = Some(Box::new(f));
        self
    }

    /// Sets the tick period. Takes effect on the next mount.
    pub fn tick_interval(mut self, period: Duration) -> Self {
        self.tick_interval = period;
        self
    }

    #[inline]
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    #[inline]
    pub fn current_time(&self) -> Timestamp {
        self.state.current_time
    }

    /// Hand positions for the time currently shown.
    #[inline]
    pub fn components(&self) -> TimeComponents {
        TimeComponents::from_time(&self.state.current_time)
    }

    /// `true` between `mount` and `unmount`.
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(Ticker::is_active)
    }

    /// Records the dial for `rect` into a fresh draw list.
    pub fn render(&self, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        self.paint(&mut Painter::new(&mut list), rect);
        list
    }

    fn on_tick(&mut self) {
        let now = self.source.now();
        self.state.current_time = now;
        if let Some(cb) = self.on_update_time.as_mut() {
            cb(now);
        }
    }
}

impl Widget for ClockFace {
    fn measure(&self, available: Vec2) -> Vec2 {
        let side = if available.is_finite() {
            available.x.min(available.y).max(0.0)
        } else {
            NOMINAL_SIZE
        };
        Vec2::new(side, side)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if !rect.is_finite() || rect.is_empty() {
            return;
        }

        let geom = DialGeometry::for_rect(rect.fit_square());
        let time = self.components();
        let m = geom.size_multiplier;
        let blur = geom.units(2.0);

        painter.fill_circle(geom.center, geom.radius, ring_color());
        painter.fill_circle(geom.center, geom.inner_radius, FACE_COLOR);

        for tick in tick_marks(&geom) {
            painter.stroke_line(tick.outer, tick.inner, tick.width, TICK_COLOR, LineCap::Butt);
        }

        painter.with_shadow(Shadow::soft(Vec2::new(m, m), blur), |p| {
            p.fill_polygon(hand_blade(&geom, geom.hour_hand_length(), time.hour_angle()), hand_color());
        });

        painter.with_shadow(Shadow::soft(Vec2::new(3.0 * m, 3.0 * m), blur), |p| {
            p.fill_polygon(hand_blade(&geom, geom.minute_hand_length(), time.minute_angle()), hand_color());
        });

        painter.with_shadow(Shadow::soft(Vec2::new(5.0 * m, 5.0 * m), blur), |p| {
            SecondHand::from_dial(&geom, time.second).paint(p);
        });
    }

    fn mount(&mut self, now: Instant) {
        if self.is_mounted() {
            return;
        }
        log::debug!("clock face mounted, ticking every {:?}", self.tick_interval);
        self.subscription = Some(Ticker::start(self.tick_interval, now));
    }

    fn unmount(&mut self) {
        if let Some(mut ticker) = self.subscription.take() {
            ticker.cancel();
            log::debug!("clock face unmounted after {} ticks", ticker.delivered());
        }
    }

    fn update(&mut self, now: Instant) -> bool {
        let Some(ticker) = self.subscription.as_mut() else {
            return false;
        };
        let Some(tick) = ticker.poll(now) else {
            return false;
        };

        if tick.missed > 0 {
            log::trace!("tick {} absorbed {} overdue ticks", tick.index, tick.missed);
        }
        self.on_tick();
        true
    }

    fn next_wakeup(&self) -> Option<Instant> {
        self.subscription.as_ref().and_then(Ticker::deadline)
    }
}
