use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `degrees`, measured clockwise from +X.
    ///
    /// Angles are taken in `f64` so callers can feed continuous time-derived
    /// values without losing precision before the trig call.
    #[inline]
    pub fn from_angle(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos as f32, sin as f32)
    }

    /// Point at `distance` from `origin` along `degrees`.
    #[inline]
    pub fn polar(origin: Vec2, distance: f32, degrees: f64) -> Self {
        origin + Self::from_angle(degrees) * distance
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Rotates by +90° (clockwise on screen, since +Y points down).
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Returns the unit vector, or zero for a (near) zero-length input.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len <= f32::EPSILON { Vec2::zero() } else { self / len }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn from_angle_zero_points_right() {
        assert!(close(Vec2::from_angle(0.0), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn from_angle_minus_ninety_points_up() {
        // +Y is down, so -90° is screen-up.
        assert!(close(Vec2::from_angle(-90.0), Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn polar_offsets_from_origin() {
        let p = Vec2::polar(Vec2::new(10.0, 10.0), 5.0, 90.0);
        assert!(close(p, Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn perp_is_orthogonal() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.dot(v.perp()), 0.0);
        assert_eq!(v.perp().length(), 5.0);
    }

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(Vec2::zero().normalized(), Vec2::zero());
        assert!(close(Vec2::new(0.0, 2.0).normalized(), Vec2::new(0.0, 1.0)));
    }
}
