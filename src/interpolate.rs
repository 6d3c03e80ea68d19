//! Clipping and linear blending of RGBA colors.

use rgb::RGBA;

/// Opaque black, returned whenever no better color is defined.
pub const BLACK: RGBA<f64> = RGBA { r: 0., g: 0., b: 0., a: 1. };

/// Build a color from its components.  Three components get an alpha
/// of `1.`; fewer than three give [`BLACK`]; components after the
/// fourth are ignored.
///
/// ```
/// use rgb_scale::{color_from_components, BLACK};
/// assert_eq!(color_from_components(&[255., 0., 0.]).a, 1.);
/// assert_eq!(color_from_components(&[255., 0.]), BLACK);
/// ```
pub fn color_from_components(c: &[f64]) -> RGBA<f64> {
    match *c {
        [r, g, b] => RGBA { r, g, b, a: 1. },
        [r, g, b, a, ..] => RGBA { r, g, b, a },
        _ => BLACK,
    }
}

/// Clamp the red, green and blue components to \[0, 255\] and the
/// alpha component to \[0, 1\].
#[inline]
pub fn clip_rgba(c: RGBA<f64>) -> RGBA<f64> {
    RGBA { r: c.r.clamp(0., 255.), g: c.g.clamp(0., 255.),
           b: c.b.clamp(0., 255.), a: c.a.clamp(0., 1.) }
}

/// Clamp `t` to \[0, 1\].  NaN is mapped to `0.`.
#[inline]
pub fn clip_t(t: f64) -> f64 {
    if t.is_nan() { 0. } else { t.clamp(0., 1.) }
}

/// Linear interpolation between `c0` (at `t = 0.`) and `c1` (at
/// `t = 1.`).  Both colors and `t` are clipped first.  The result is
/// not rounded.
pub fn interpolate_rgba(c0: RGBA<f64>, c1: RGBA<f64>, t: f64) -> RGBA<f64> {
    let c0 = clip_rgba(c0);
    let c1 = clip_rgba(c1);
    let t = clip_t(t);
    RGBA { r: c0.r + t * (c1.r - c0.r),
           g: c0.g + t * (c1.g - c0.g),
           b: c0.b + t * (c1.b - c0.b),
           a: c0.a + t * (c1.a - c0.a) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn components() {
        assert_eq!(color_from_components(&[1., 2., 3.]),
                   RGBA::new(1., 2., 3., 1.));
        assert_eq!(color_from_components(&[1., 2., 3., 0.5, 9.]),
                   RGBA::new(1., 2., 3., 0.5));
        assert_eq!(color_from_components(&[]), BLACK);
    }

    #[test]
    fn clipping() {
        let c = clip_rgba(RGBA::new(-3., 300., 12.5, 1.5));
        assert_eq!(c, RGBA::new(0., 255., 12.5, 1.));
        assert_eq!(clip_t(-0.1), 0.);
        assert_eq!(clip_t(1.1), 1.);
        assert_eq!(clip_t(f64::NAN), 0.);
    }

    #[test]
    fn blend() {
        let black = RGBA::new(0., 0., 0., 1.);
        let clear = RGBA::new(255., 255., 0., 0.);
        let c = interpolate_rgba(black, clear, 0.2);
        assert_approx_eq!(c.r, 51.);
        assert_approx_eq!(c.g, 51.);
        assert_approx_eq!(c.b, 0.);
        assert_approx_eq!(c.a, 0.8);
        assert_eq!(interpolate_rgba(black, clear, 7.), clear);
        assert_eq!(interpolate_rgba(black, clear, f64::NAN), black);
    }

    #[test]
    fn blend_clips_inputs() {
        let c = interpolate_rgba(RGBA::new(-100., 0., 0., 2.),
                                 RGBA::new(510., 0., 0., 1.), 0.5);
        assert_approx_eq!(c.r, 127.5);
        assert_approx_eq!(c.a, 1.);
    }
}
