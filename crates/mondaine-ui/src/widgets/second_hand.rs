use mondaine_engine::coords::Vec2;
use mondaine_engine::paint::Color;
use mondaine_engine::scene::LineCap;

use crate::dial::DialGeometry;
use crate::painter::Painter;

/// Signal red of the second hand.
pub const SECOND_HAND_RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);

/// The red sweeping second hand: shaft, tip disc and centre pivot.
///
/// Receives precomputed dial values rather than a timestamp, so the face
/// decides what `second` means.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecondHand {
    pub size_multiplier: f32,
    pub center: Vec2,
    pub inner_radius: f32,
    /// Continuous second in `[0, 60)`.
    pub second: f64,
    pub tick_padding: f32,
    pub radius: f32,
}

impl SecondHand {
    pub fn new(
        size_multiplier: f32,
        center: Vec2,
        inner_radius: f32,
        second: f64,
        tick_padding: f32,
        radius: f32,
    ) -> Self {
        Self { size_multiplier, center, inner_radius, second, tick_padding, radius }
    }

    pub fn from_dial(geom: &DialGeometry, second: f64) -> Self {
        Self::new(
            geom.size_multiplier,
            geom.center,
            geom.inner_radius,
            second,
            geom.tick_padding,
            geom.radius,
        )
    }

    #[inline]
    fn units(&self, n: f32) -> f32 {
        n * self.size_multiplier
    }

    /// Distance from the centre to the front end of the shaft.
    #[inline]
    pub fn height(&self) -> f32 {
        self.inner_radius - self.tick_padding - self.units(18.5)
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.second * 6.0 - 90.0
    }

    pub fn tip_center(&self) -> Vec2 {
        Vec2::polar(self.center, self.height() + self.units(2.0), self.angle())
    }

    #[inline]
    pub fn tip_radius(&self) -> f32 {
        self.units(4.0)
    }

    /// The pivot fills what is left of the dial after insetting it by
    /// `radius - 2m` on every side.
    #[inline]
    pub fn pivot_radius(&self) -> f32 {
        (self.radius - (self.radius - self.units(2.0))).max(0.0)
    }

    /// Shaft endpoints, tail first.
    pub fn shaft(&self) -> (Vec2, Vec2) {
        let angle = self.angle();
        (
            Vec2::polar(self.center, -self.units(16.0), angle),
            Vec2::polar(self.center, self.height(), angle),
        )
    }

    #[inline]
    pub fn shaft_width(&self) -> f32 {
        self.units(1.5)
    }

    pub fn paint(&self, painter: &mut Painter<'_>) {
        painter.fill_circle(self.tip_center(), self.tip_radius(), SECOND_HAND_RED);
        painter.fill_circle(self.center, self.pivot_radius(), SECOND_HAND_RED);

        let (tail, front) = self.shaft();
        painter.stroke_line(tail, front, self.shaft_width(), SECOND_HAND_RED, LineCap::Round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mondaine_engine::coords::Rect;
    use mondaine_engine::scene::{DrawCmd, DrawList};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    fn hand(width: f32, second: f64) -> SecondHand {
        SecondHand::from_dial(&DialGeometry::for_rect(Rect::new(0.0, 0.0, width, width)), second)
    }

    #[test]
    fn upright_at_second_zero() {
        let h = hand(150.0, 0.0);
        assert_eq!(h.angle(), -90.0);
        assert_eq!(h.height(), 48.5);
        assert!(close(h.tip_center(), Vec2::new(75.0, 75.0 - 50.5)));
        assert_eq!(h.tip_radius(), 4.0);
        assert_eq!(h.pivot_radius(), 2.0);

        let (tail, front) = h.shaft();
        assert!(close(tail, Vec2::new(75.0, 91.0)));
        assert!(close(front, Vec2::new(75.0, 26.5)));
    }

    #[test]
    fn quarter_past_points_right() {
        let h = hand(150.0, 15.0);
        assert_eq!(h.angle(), 0.0);
        assert!(close(h.tip_center(), Vec2::new(125.5, 75.0)));
    }

    #[test]
    fn scales_with_dial() {
        let a = hand(150.0, 42.0);
        let b = hand(300.0, 42.0);
        assert_eq!(a.angle(), b.angle());
        assert_eq!(b.height(), 2.0 * a.height());
        assert_eq!(b.shaft_width(), 2.0 * a.shaft_width());
        assert_eq!(b.pivot_radius(), 2.0 * a.pivot_radius());
    }

    #[test]
    fn paints_tip_pivot_then_shaft() {
        let mut list = DrawList::new();
        hand(150.0, 30.0).paint(&mut Painter::new(&mut list));

        let cmds: Vec<DrawCmd> = list.iter_in_paint_order().map(|i| i.cmd.clone()).collect();
        assert_eq!(cmds.len(), 3);
        assert!(matches!(&cmds[0], DrawCmd::Circle(c) if c.radius == 4.0));
        assert!(matches!(&cmds[1], DrawCmd::Circle(c) if c.radius == 2.0));
        assert!(matches!(&cmds[2], DrawCmd::Line(l) if l.cap == LineCap::Round && l.width == 1.5));
        assert!(cmds.iter().all(|c| c.color() == SECOND_HAND_RED));
    }
}
