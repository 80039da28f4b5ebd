use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled circle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Extra soft edge in logical pixels. `0.0` = crisp anti-aliased edge.
    pub softness: f32,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color, softness: 0.0 }
    }
}

impl DrawList {
    /// Records a solid circle.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, color)));
    }
}
