/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Fringe vertices fade to `transparent()` and the pipeline blends with
/// `One, OneMinusSrcAlpha`, so interpolating between an opaque fill and its
/// transparent edge stays free of dark halos.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Creates a premultiplied linear color from straight sRGB-encoded
    /// components in `[0, 1]`.
    ///
    /// The surface is sRGB, so the GPU encodes on write. Authored colors go
    /// through here to land on screen with the value they were picked at.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// Opaque sRGB grey, see [`from_srgb`](Self::from_srgb).
    #[inline]
    pub fn srgb_gray(level: f32) -> Self {
        Self::from_srgb(level, level, level, 1.0)
    }

    /// Scales opacity by `factor` (clamped to `[0, 1]`), keeping premultiplication.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self { r: self.r * f, g: self.g * f, b: self.b * f, a: self.a * f }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// sRGB transfer function, decoding direction.
fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn scale_alpha_keeps_premultiplication() {
        let c = Color::black().scale_alpha(0.33);
        assert_eq!(c.a, 0.33);
        assert_eq!((c.r, c.g, c.b), (0.0, 0.0, 0.0));

        let w = Color::white().scale_alpha(0.5);
        assert_eq!(w, Color::from_premul(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn srgb_decodes_to_linear() {
        let dark = Color::from_srgb(0.2, 0.2, 0.2, 1.0);
        assert!((dark.r - 0.0331).abs() < 1e-4, "{dark:?}");
        assert_eq!((dark.r, dark.a), (dark.b, 1.0));

        let light = Color::srgb_gray(0.7);
        assert!((light.g - 0.4479).abs() < 1e-4, "{light:?}");

        // Toe of the curve is linear.
        assert!((Color::srgb_gray(0.04).r - 0.04 / 12.92).abs() < 1e-7);
    }

    #[test]
    fn srgb_endpoints_are_fixed() {
        assert_eq!(Color::from_srgb(1.0, 0.0, 0.0, 1.0), Color::from_premul(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::srgb_gray(1.0), Color::white());
        assert_eq!(Color::srgb_gray(0.0), Color::black());
    }

    #[test]
    fn srgb_premultiplies_after_decoding() {
        let c = Color::from_srgb(0.2, 0.2, 0.2, 0.5);
        let opaque = Color::from_srgb(0.2, 0.2, 0.2, 1.0);
        assert!((c.r - opaque.r * 0.5).abs() < 1e-7);
        assert_eq!(c.a, 0.5);
    }
}
