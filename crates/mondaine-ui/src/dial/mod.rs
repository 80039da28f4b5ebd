//! Pure dial math: layout, hand positions, tick marks and hand outlines.
//!
//! Nothing here touches the draw list; widgets turn these values into
//! shapes.

mod components;
mod geometry;
mod hand;
mod ticks;

pub use components::TimeComponents;
pub use geometry::{DialGeometry, REFERENCE_WIDTH};
pub use hand::hand_blade;
pub use ticks::{is_major, tick_angle, tick_marks, TickMark, TICK_COUNT};
