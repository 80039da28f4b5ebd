use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Places a box of `size` centred inside this rectangle.
    ///
    /// The box may overflow when it is larger than `self`; callers that need
    /// containment measure against `self.size` first.
    #[inline]
    pub fn centered(self, size: Vec2) -> Rect {
        Rect::from_origin_size(self.center() - size / 2.0, size)
    }

    /// Largest square that fits inside this rectangle, centred.
    ///
    /// Negative extents are treated as zero.
    #[inline]
    pub fn fit_square(self) -> Rect {
        let side = self.size.x.min(self.size.y).max(0.0);
        self.centered(Vec2::new(side, side))
    }
}
