use mondaine_engine::coords::Vec2;

use super::DialGeometry;

/// Marks around the dial, one per minute.
pub const TICK_COUNT: usize = 60;

/// One straight tick mark, outer end first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub angle: f64,
    pub outer: Vec2,
    pub inner: Vec2,
    pub width: f32,
}

impl TickMark {
    #[inline]
    pub fn is_major(&self) -> bool {
        is_major(self.index)
    }
}

/// Hour positions: every fifth mark.
#[inline]
pub fn is_major(index: usize) -> bool {
    index % 5 == 0
}

/// Angle of mark `index` in degrees; mark 0 sits at 12 o'clock.
#[inline]
pub fn tick_angle(index: usize) -> f64 {
    index as f64 * 6.0 - 90.0
}

/// All 60 marks in paint order: the 48 minor marks, then the 12 major ones.
pub fn tick_marks(geom: &DialGeometry) -> Vec<TickMark> {
    let minor = (0..TICK_COUNT).filter(|&i| !is_major(i));
    let major = (0..TICK_COUNT).filter(|&i| is_major(i));

    minor
        .chain(major)
        .map(|index| tick_mark(geom, index))
        .collect()
}

fn tick_mark(geom: &DialGeometry, index: usize) -> TickMark {
    let (length, width) = if is_major(index) {
        (geom.units(12.5), geom.units(4.0))
    } else {
        (geom.units(4.0), geom.units(2.0))
    };

    let angle = tick_angle(index);
    let outer_radius = geom.tick_outer_radius();

    TickMark {
        index,
        angle,
        outer: geom.point_at(outer_radius, angle),
        inner: geom.point_at(outer_radius - length, angle),
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mondaine_engine::coords::Rect;

    fn geom(width: f32) -> DialGeometry {
        DialGeometry::for_rect(Rect::new(0.0, 0.0, width, width))
    }

    #[test]
    fn forty_eight_minor_then_twelve_major() {
        let marks = tick_marks(&geom(150.0));
        assert_eq!(marks.len(), TICK_COUNT);
        assert!(marks[..48].iter().all(|t| !t.is_major()));
        assert!(marks[48..].iter().all(|t| t.is_major()));

        let majors: Vec<usize> = marks[48..].iter().map(|t| t.index).collect();
        assert_eq!(majors, vec![0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55]);
    }

    #[test]
    fn angle_is_six_degrees_per_index() {
        for i in 0..TICK_COUNT {
            assert_eq!(tick_angle(i), i as f64 * 6.0 - 90.0);
        }
        assert_eq!(tick_angle(15), 0.0);
    }

    #[test]
    fn lengths_and_widths_by_kind() {
        let g = geom(150.0);
        for t in tick_marks(&g) {
            let length = (t.outer - t.inner).length();
            if t.is_major() {
                assert!((length - 12.5).abs() < 1e-3);
                assert_eq!(t.width, 4.0);
            } else {
                assert!((length - 4.0).abs() < 1e-3);
                assert_eq!(t.width, 2.0);
            }
            assert!(((t.outer - g.center).length() - 67.0).abs() < 1e-3);
        }
    }

    #[test]
    fn three_oclock_mark_is_horizontal() {
        let g = geom(150.0);
        let t = tick_mark(&g, 15);
        assert!((t.outer.y - g.center.y).abs() < 1e-4);
        assert!((t.inner.y - g.center.y).abs() < 1e-4);
        assert!(t.outer.x > t.inner.x);
    }

    #[test]
    fn marks_scale_with_dial() {
        let small = tick_marks(&geom(150.0));
        let large = tick_marks(&geom(300.0));
        for (a, b) in small.iter().zip(&large) {
            assert_eq!(a.angle, b.angle);
            assert_eq!(b.width, 2.0 * a.width);
            let la = (a.outer - a.inner).length();
            let lb = (b.outer - b.inner).length();
            assert!((lb - 2.0 * la).abs() < 1e-3);
        }
    }
}
