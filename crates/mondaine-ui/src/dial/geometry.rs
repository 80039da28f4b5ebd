use mondaine_engine::coords::{Rect, Vec2};

/// Dial width at which `size_multiplier == 1`. All dial dimensions are
/// authored in units of this reference width.
pub const REFERENCE_WIDTH: f32 = 150.0;

/// Layout of the dial, derived from the draw area on every render.
///
/// All lengths are in logical pixels and scale linearly with
/// `size_multiplier`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialGeometry {
    pub size_multiplier: f32,
    /// Width of the grey outer ring.
    pub border_width: f32,
    pub radius: f32,
    /// Radius of the white face inside the ring.
    pub inner_radius: f32,
    /// Gap between the ring and the outer end of the tick marks.
    pub tick_padding: f32,
    pub center: Vec2,
}

impl DialGeometry {
    /// Geometry for a dial drawn into `rect`.
    ///
    /// Only the width drives the scale; callers hand in a square.
    pub fn for_rect(rect: Rect) -> Self {
        let width = rect.size.x.max(0.0);
        let m = width / REFERENCE_WIDTH;
        let radius = width / 2.0;
        let border_width = 4.0 * m;

        Self {
            size_multiplier: m,
            border_width,
            radius,
            inner_radius: radius - border_width,
            tick_padding: 4.0 * m,
            center: rect.center(),
        }
    }

    /// Converts reference units into logical pixels.
    #[inline]
    pub fn units(&self, n: f32) -> f32 {
        n * self.size_multiplier
    }

    /// Point `distance` from the centre along `degrees` (clockwise from 3 o'clock).
    #[inline]
    pub fn point_at(&self, distance: f32, degrees: f64) -> Vec2 {
        Vec2::polar(self.center, distance, degrees)
    }

    /// Distance from the centre to the outer end of every tick mark.
    #[inline]
    pub fn tick_outer_radius(&self) -> f32 {
        self.inner_radius - self.tick_padding
    }

    #[inline]
    pub fn minute_hand_length(&self) -> f32 {
        self.tick_outer_radius()
    }

    #[inline]
    pub fn hour_hand_length(&self) -> f32 {
        self.tick_outer_radius() - self.units(16.5)
    }

    #[inline]
    pub fn second_hand_length(&self) -> f32 {
        self.tick_outer_radius() - self.units(18.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn reference_width_is_unit_scale() {
        let g = DialGeometry::for_rect(Rect::new(0.0, 0.0, 150.0, 150.0));
        assert_eq!(g.size_multiplier, 1.0);
        assert_eq!(g.radius, 75.0);
        assert_eq!(g.border_width, 4.0);
        assert_eq!(g.inner_radius, 71.0);
        assert_eq!(g.tick_padding, 4.0);
        assert_eq!(g.center, Vec2::new(75.0, 75.0));
        assert_eq!(g.minute_hand_length(), 67.0);
        assert_eq!(g.hour_hand_length(), 50.5);
        assert_eq!(g.second_hand_length(), 48.5);
    }

    #[test]
    fn doubling_width_doubles_every_length() {
        let a = DialGeometry::for_rect(Rect::new(0.0, 0.0, 300.0, 300.0));
        let b = DialGeometry::for_rect(Rect::new(0.0, 0.0, 600.0, 600.0));

        assert!(approx(b.size_multiplier, 2.0 * a.size_multiplier));
        assert!(approx(b.radius, 2.0 * a.radius));
        assert!(approx(b.border_width, 2.0 * a.border_width));
        assert!(approx(b.inner_radius, 2.0 * a.inner_radius));
        assert!(approx(b.tick_padding, 2.0 * a.tick_padding));
        assert!(approx(b.hour_hand_length(), 2.0 * a.hour_hand_length()));
        assert!(approx(b.second_hand_length(), 2.0 * a.second_hand_length()));
    }

    #[test]
    fn center_follows_rect_origin() {
        let g = DialGeometry::for_rect(Rect::new(50.0, 10.0, 300.0, 300.0));
        assert_eq!(g.center, Vec2::new(200.0, 160.0));
    }

    #[test]
    fn point_at_top_of_dial() {
        let g = DialGeometry::for_rect(Rect::new(0.0, 0.0, 150.0, 150.0));
        let p = g.point_at(10.0, -90.0);
        assert!(approx(p.x, 75.0));
        assert!(approx(p.y, 65.0));
    }
}
