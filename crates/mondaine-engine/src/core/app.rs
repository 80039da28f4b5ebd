use std::time::Instant;

use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Whether the app's visible state changed since the last frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Redraw {
    Request,
    Skip,
}

/// Application contract implemented by higher layers.
///
/// Call order on the event-loop thread:
/// 1. `on_mount` once the window exists
/// 2. per loop iteration: `on_update`, then `on_frame` if a redraw happened,
///    then `next_wakeup` to decide how long the loop may sleep
/// 3. `on_unmount` before the window is torn down
pub trait App {
    /// The window is up; start timers and subscriptions here.
    fn on_mount(&mut self, now: Instant) {
        let _ = now;
    }

    /// The window is going away; cancel everything started in `on_mount`.
    fn on_unmount(&mut self) {}

    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Advances time-driven state. Return `Redraw::Request` when a new frame is needed.
    fn on_update(&mut self, now: Instant) -> Redraw {
        let _ = now;
        Redraw::Skip
    }

    /// Earliest instant `on_update` has work to do. `None` = sleep until an event arrives.
    fn next_wakeup(&self) -> Option<Instant> {
        None
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
