use std::time::{Duration, Instant};

use winit::dpi::LogicalSize;

use mondaine_engine::coords::Rect;
use mondaine_engine::core::{App as EngineApp, AppControl, FrameCtx, Redraw};
use mondaine_engine::device::GpuInit;
use mondaine_engine::paint::Color;
use mondaine_engine::render::MeshRenderer;
use mondaine_engine::scene::DrawList;
use mondaine_engine::window::{Runtime, RuntimeConfig};

use crate::painter::Painter;
use crate::source::{SystemTime, TimeSource, Timestamp};
use crate::widget::Widget;
use crate::widgets::clock_face::{ClockFace, UpdateTimeCallback, DEFAULT_TICK_INTERVAL, NOMINAL_SIZE};

// ── Application ───────────────────────────────────────────────────────────

/// Top-level builder: configure the window and the clock, then start the
/// event loop with [`run`](Self::run).
///
/// ```rust,ignore
/// Application::new()
///     .title("Mondaine")
///     .size(300.0, 300.0)
///     .tick_interval(Duration::from_millis(100))
///     .on_update_time(|t| log::info!("{t}"))
///     .run();
/// ```
pub struct Application {
    title:          String,
    width:          f64,
    height:         f64,
    tick_interval:  Duration,
    source:         Box<dyn TimeSource>,
    on_update_time: Option<UpdateTimeCallback>,
    background:     Color,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:          "mondaine".to_string(),
            width:          f64::from(NOMINAL_SIZE),
            height:         f64::from(NOMINAL_SIZE),
            tick_interval:  DEFAULT_TICK_INTERVAL,
            source:         Box::new(SystemTime),
            on_update_time: None,
            background:     Color::white(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// How often the clock samples its time source.
    pub fn tick_interval(mut self, period: Duration) -> Self {
        self.tick_interval = period;
        self
    }

    /// Replace the local wall clock, e.g. with a [`FixedTime`](crate::source::FixedTime)
    /// for screenshots.
    pub fn time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Called once per tick with the time the dial now shows.
    pub fn on_update_time(mut self, f: impl FnMut(Timestamp) + 'static) -> Self {
        self.on_update_time = Some(Box::new(f));
        self
    }

    /// Window clear color around the dial.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Builds the clock face this application will host.
    fn build_face(&mut self, source: Box<dyn TimeSource>) -> ClockFace {
        let face = ClockFace::from_source(source).tick_interval(self.tick_interval);
        match self.on_update_time.take() {
            Some(cb) => face.on_update_time(cb),
            None => face,
        }
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Start the event loop. This never returns.
    pub fn run(mut self) -> ! {
        let source = std::mem::replace(&mut self.source, Box::new(SystemTime));
        let face = self.build_face(source);

        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            ..RuntimeConfig::default()
        };
        let state = ClockAppState::new(Box::new(face), self.background);

        if let Err(e) = Runtime::run(config, GpuInit::default(), state) {
            log::error!("mondaine runtime error: {e:#}");
            std::process::exit(1);
        }
        std::process::exit(0);
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockAppState ─────────────────────────────────────────────────────────

/// Internal state that implements `mondaine_engine::core::App`.
///
/// Owns the root widget plus the per-frame draw list and renderer.
struct ClockAppState {
    root:       Box<dyn Widget>,
    background: Color,
    draw_list:  DrawList,
    renderer:   MeshRenderer,
}

impl ClockAppState {
    fn new(root: Box<dyn Widget>, background: Color) -> Self {
        Self {
            root,
            background,
            draw_list: DrawList::new(),
            renderer:  MeshRenderer::new(),
        }
    }

    /// Lays the root out inside `bounds` and records it into the draw list.
    fn record(&mut self, bounds: Rect) {
        let size = self.root.measure(bounds.size);
        let rect = bounds.centered(size);

        self.draw_list.clear();
        self.root.paint(&mut Painter::new(&mut self.draw_list), rect);
    }
}

impl EngineApp for ClockAppState {
    fn on_mount(&mut self, now: Instant) {
        self.root.mount(now);
    }

    fn on_unmount(&mut self) {
        self.root.unmount();
    }

    fn on_update(&mut self, now: Instant) -> Redraw {
        if self.root.update(now) { Redraw::Request } else { Redraw::Skip }
    }

    fn next_wakeup(&self) -> Option<Instant> {
        self.root.next_wakeup()
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.record(ctx.window.viewport().bounds());

        let dl       = &mut self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(self.background, |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mondaine_engine::scene::DrawCmd;

    use crate::source::FixedTime;

    fn noon() -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 9, 29)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid time")
    }

    #[test]
    fn app_state_forwards_lifecycle_to_root() {
        let face = ClockFace::new(FixedTime(noon()));
        let mut state = ClockAppState::new(Box::new(face), Color::white());

        let t0 = Instant::now();
        assert_eq!(state.on_update(t0), Redraw::Skip);
        assert_eq!(state.next_wakeup(), None);

        state.on_mount(t0);
        assert_eq!(state.on_update(t0), Redraw::Request);
        assert_eq!(state.on_update(t0), Redraw::Skip);
        assert_eq!(state.next_wakeup(), Some(t0 + DEFAULT_TICK_INTERVAL));

        state.on_unmount();
        assert_eq!(state.next_wakeup(), None);
    }

    #[test]
    fn record_centres_dial_in_window() {
        let face = ClockFace::new(FixedTime(noon()));
        let mut state = ClockAppState::new(Box::new(face), Color::white());

        state.record(Rect::new(0.0, 0.0, 500.0, 300.0));
        let first = state.draw_list.iter_in_paint_order().next().map(|i| i.cmd.clone());
        let Some(DrawCmd::Circle(ring)) = first else { panic!("ring first") };
        assert_eq!(ring.center.x, 250.0);
        assert_eq!(ring.radius, 150.0);

        // Re-recording replaces the previous frame.
        let len = state.draw_list.len();
        state.record(Rect::new(0.0, 0.0, 500.0, 300.0));
        assert_eq!(state.draw_list.len(), len);
    }

    #[test]
    fn builder_wires_interval_and_callback() {
        let mut app = Application::new()
            .tick_interval(Duration::from_millis(250))
            .on_update_time(|_| {});
        let mut face = app.build_face(Box::new(FixedTime(noon())));
        assert!(app.on_update_time.is_none());

        let t0 = Instant::now();
        face.mount(t0);
        face.update(t0);
        assert_eq!(face.next_wakeup(), Some(t0 + Duration::from_millis(250)));
    }
}
