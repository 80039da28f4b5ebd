//! Mondaine UI: an analog station clock on top of `mondaine-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use mondaine_ui::Application;
//!
//! Application::new()
//!     .title("Mondaine")
//!     .on_update_time(|t| log::trace!("now {t}"))
//!     .run();
//! ```
//!
//! # Rendering without a window
//!
//! [`ClockFace::render`](widgets::ClockFace::render) records the dial into a
//! plain `DrawList`, which is how the tests inspect it:
//!
//! ```rust,ignore
//! use mondaine_ui::prelude::*;
//!
//! let face = ClockFace::new(FixedTime(noon));
//! let list = face.render(Rect::new(0.0, 0.0, 300.0, 300.0));
//! ```

pub mod app;
pub mod dial;
pub mod painter;
pub mod source;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything needed to host or extend the clock.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::dial::{DialGeometry, TimeComponents};
    pub use crate::painter::Painter;
    pub use crate::source::{FixedTime, ManualTime, SystemTime, TimeSource, Timestamp};
    pub use crate::widget::Widget;
    pub use crate::widgets::{ClockFace, ClockState, SecondHand};

    pub use mondaine_engine::coords::{Rect, Vec2};
    pub use mondaine_engine::paint::Color;
    pub use mondaine_engine::scene::{LineCap, Shadow};
}
