//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and
//! higher layers (clock UI, studio): the `App` lifecycle and the per-frame
//! context.

mod app;
mod ctx;

pub use app::{App, AppControl, Redraw};
pub use ctx::{FrameCtx, WindowCtx};
