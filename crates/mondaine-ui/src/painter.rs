use mondaine_engine::coords::Vec2;
use mondaine_engine::paint::Color;
use mondaine_engine::scene::{DrawCmd, DrawList, LineCap, Shadow, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`. Every call lands on its own z-layer, so
/// shapes stack in call order regardless of kind.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid disc.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color);
    }

    /// Straight stroke from `from` to `to`.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color, cap);
    }

    /// Convex polygon; the outline may wind either way.
    pub fn fill_polygon(&mut self, points: impl Into<Vec<Vec2>>, color: Color) {
        let z = self.next_z();
        self.draw_list.push_polygon(z, points, color);
    }

    // ── effects ───────────────────────────────────────────────────────────

    /// Paints whatever `f` draws with a drop shadow underneath.
    ///
    /// The shadow is cast by the group as a whole: it sits below every shape
    /// of the group and above everything painted before it.
    pub fn with_shadow<F>(&mut self, shadow: Shadow, f: F)
    where
        F: FnOnce(&mut Painter<'a>),
    {
        let shadow_z = self.next_z();
        let first = self.draw_list.len();

        f(self);

        let casts: Vec<DrawCmd> = self.draw_list.items()[first..]
            .iter()
            .map(|item| item.cmd.shadow(&shadow))
            .collect();
        for cmd in casts {
            self.draw_list.push(shadow_z, cmd);
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint_order(list: &mut DrawList) -> Vec<DrawCmd> {
        list.iter_in_paint_order().map(|item| item.cmd.clone()).collect()
    }

    #[test]
    fn shapes_stack_in_call_order() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.fill_polygon(vec![Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)], Color::black());
            p.fill_circle(Vec2::zero(), 2.0, Color::white());
        }
        let order = paint_order(&mut list);
        assert!(matches!(order[0], DrawCmd::Polygon(_)));
        assert!(matches!(order[1], DrawCmd::Circle(_)));
    }

    #[test]
    fn shadow_sits_between_earlier_shapes_and_group() {
        let mut list = DrawList::new();
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let shadow = Shadow::soft(Vec2::new(5.0, 5.0), 2.0);
        {
            let mut p = Painter::new(&mut list);
            p.fill_circle(Vec2::zero(), 10.0, Color::white());
            p.with_shadow(shadow, |p| {
                p.fill_circle(Vec2::zero(), 2.0, red);
                p.stroke_line(Vec2::zero(), Vec2::new(0.0, -8.0), 1.5, red, LineCap::Round);
            });
            p.fill_circle(Vec2::zero(), 1.0, Color::black());
        }

        let order = paint_order(&mut list);
        assert_eq!(order.len(), 6);
        assert_eq!(order[0].color(), Color::white());

        // Both casts, in the group's own order, tinted and offset.
        let DrawCmd::Circle(cast) = &order[1] else { panic!("expected circle cast") };
        assert_eq!(cast.center, Vec2::new(5.0, 5.0));
        assert_eq!(cast.color, shadow.color);
        assert_eq!(cast.softness, 2.0);
        assert!(matches!(order[2], DrawCmd::Line(_)));
        assert_eq!(order[2].softness(), 2.0);

        assert_eq!(order[3].color(), red);
        assert_eq!(order[4].color(), red);
        assert_eq!(order[4].softness(), 0.0);
        assert_eq!(order[5].color(), Color::black());
    }
}
