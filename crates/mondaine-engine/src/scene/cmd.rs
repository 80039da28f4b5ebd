use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::shapes::{CircleCmd, LineCmd, PolygonCmd, Shadow};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` how to turn it into triangles
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
    Polygon(PolygonCmd),
}

impl DrawCmd {
    /// Fill color of the shape.
    pub fn color(&self) -> Color {
        match self {
            DrawCmd::Circle(c) => c.color,
            DrawCmd::Line(l) => l.color,
            DrawCmd::Polygon(p) => p.color,
        }
    }

    /// Soft-edge width of the shape in logical pixels.
    pub fn softness(&self) -> f32 {
        match self {
            DrawCmd::Circle(c) => c.softness,
            DrawCmd::Line(l) => l.softness,
            DrawCmd::Polygon(p) => p.softness,
        }
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> DrawCmd {
        let mut out = self.clone();
        match &mut out {
            DrawCmd::Circle(c) => c.center = c.center + offset,
            DrawCmd::Line(l) => {
                l.from = l.from + offset;
                l.to = l.to + offset;
            }
            DrawCmd::Polygon(p) => p.points.iter_mut().for_each(|pt| *pt = *pt + offset),
        }
        out
    }

    /// Returns the shadow this shape casts: same outline, moved by the shadow
    /// offset, tinted with the shadow color and softened by its blur.
    ///
    /// The tint is scaled by the shape's own opacity so translucent shapes cast
    /// proportionally lighter shadows.
    pub fn shadow(&self, shadow: &Shadow) -> DrawCmd {
        let tint = shadow.color.scale_alpha(self.color().a);
        let blur = shadow.blur.max(0.0);
        let mut out = self.translated(shadow.offset);
        match &mut out {
            DrawCmd::Circle(c) => {
                c.color = tint;
                c.softness = blur;
            }
            DrawCmd::Line(l) => {
                l.color = tint;
                l.softness = blur;
            }
            DrawCmd::Polygon(p) => {
                p.color = tint;
                p.softness = blur;
            }
        }
        out
    }
}
