use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::LineCap;

/// Stroked straight segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
    pub softness: f32,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) -> Self {
        Self { from, to, width, color, cap, softness: 0.0 }
    }
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(
        &mut self,
        z: ZIndex,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
        cap: LineCap,
    ) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, width, color, cap)));
    }
}
