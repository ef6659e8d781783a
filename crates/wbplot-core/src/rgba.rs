//! RGBA color type.

/// An RGBA color with components in `[0.0, 1.0]`.
///
/// CIFTI label tables store colors as decimal text attributes, so components
/// stay in normalized floating point rather than `u8`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component (1.0 = opaque).
    pub a: f64,
}

impl Rgba {
    /// Creates a color from four components.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[inline]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Linear interpolation between two colors.
    ///
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let black = Rgba::opaque(0.0, 0.0, 0.0);
        let white = Rgba::opaque(1.0, 1.0, 1.0);
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        let mid = black.lerp(white, 0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_relative_eq!(mid.g, 0.5);
        assert_relative_eq!(mid.b, 0.5);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Rgba::opaque(0.2, 0.4, 0.6);
        let b = Rgba::opaque(0.8, 0.6, 0.4);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
    }
}
