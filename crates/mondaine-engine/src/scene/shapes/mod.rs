pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod polygon;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use polygon::PolygonCmd;

use crate::coords::Vec2;
use crate::paint::Color;

/// End-cap style for stroked lines.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    /// Flat end exactly at the endpoint.
    #[default]
    Butt,
    /// Semicircular end of diameter `width` centred on the endpoint.
    Round,
}

/// Drop shadow cast by a shape or a group of shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    /// Translation of the shadow relative to the casting shape.
    pub offset: Vec2,
    /// Width of the soft edge in logical pixels.
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    /// Default shadow tint: black at one third opacity.
    pub const DEFAULT_OPACITY: f32 = 0.33;

    #[inline]
    pub fn new(offset: Vec2, blur: f32, color: Color) -> Self {
        Self { offset, blur, color }
    }

    /// Shadow with the default tint.
    #[inline]
    pub fn soft(offset: Vec2, blur: f32) -> Self {
        Self::new(offset, blur, Color::black().scale_alpha(Self::DEFAULT_OPACITY))
    }
}
