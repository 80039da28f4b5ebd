//! Paint model shared between UI and renderers.
//!
//! Every shape is filled with a single premultiplied colour; geometry types
//! remain in `coords`.

pub mod color;

pub use color::Color;
