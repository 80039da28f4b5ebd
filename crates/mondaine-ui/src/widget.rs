use std::time::Instant;

use mondaine_engine::coords::{Rect, Vec2};

use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// A component the [`Application`](crate::app::Application) hosts as its root.
///
/// Layout and painting are required; the lifecycle hooks default to a
/// static widget that never asks for a frame on its own.
///
/// ```rust,ignore
/// use mondaine_ui::prelude::*;
///
/// pub struct Pip { color: Color }
///
/// impl Widget for Pip {
///     fn measure(&self, available: Vec2) -> Vec2 {
///         let side = available.x.min(available.y);
///         Vec2::new(side, side)
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_circle(rect.center(), rect.size.x / 2.0, self.color);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Size this widget wants inside `available` logical pixels.
    ///
    /// Must be deterministic; the host calls it every frame.
    fn measure(&self, available: Vec2) -> Vec2;

    /// Draw into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// The widget became visible. Start timers here.
    fn mount(&mut self, _now: Instant) {}

    /// The widget is going away. Cancel everything `mount` started.
    fn unmount(&mut self) {}

    /// Advance time-driven state. Returns `true` when a repaint is needed.
    fn update(&mut self, _now: Instant) -> bool {
        false
    }

    /// Earliest instant `update` has anything to do.
    fn next_wakeup(&self) -> Option<Instant> {
        None
    }
}
