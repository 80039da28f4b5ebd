//! Mondaine engine crate.
//!
//! Platform + GPU runtime pieces used by the clock widgets: a single-window
//! event loop, a tessellating scene renderer and a tick scheduler.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
