use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled convex polygon payload.
///
/// Points may wind either way. Concave input is tessellated as a fan from the
/// first point and will look wrong; callers only submit convex outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub softness: f32,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color, softness: 0.0 }
    }
}

impl DrawList {
    /// Records a filled convex polygon.
    #[inline]
    pub fn push_polygon(&mut self, z: ZIndex, points: impl Into<Vec<Vec2>>, color: Color) {
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(points.into(), color)));
    }
}
