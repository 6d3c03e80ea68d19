//! Color scales: map numbers to RGBA colors.
//!
//! A [`ColorScale`] is a list of color stops placed on \[0, 1\] and a
//! [`Domain`] of input values, either continuous (two edges) or
//! classed (more edges, each value is binned first).
//!
//! ```
//! use rgb_scale::ColorScale;
//! let mut scale = ColorScale::new(&[[0., 0., 0., 1.], [255., 0., 0., 1.],
//!                                   [255., 255., 0., 0.], [255., 255., 255., 1.]])
//!     .with_positions(&[0., 0.25, 0.75, 1.])
//!     .with_domain(&[0., 100.]);
//! let c = scale.map(50.);
//! assert_eq!((c.r, c.g, c.b, c.a), (255., 127.5, 0., 0.5));
//! ```
//!
//! Colors are [`Color`]s (`RGBA<f64>`) with red, green and blue in
//! \[0, 255\] and alpha in \[0, 1\].  They convert to the pixel types
//! of the [`rgb`] crate with [`RGBColor`].  A few [`presets`] are
//! provided and scales can be described by a [`ScaleConfig`]
//! (serializable with the `serde` feature).

use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod cache;
mod config;
mod domain;
mod interpolate;
pub mod presets;
mod scale;

pub use config::{ScaleConfig, ScaleError};
pub use domain::Domain;
pub use interpolate::{clip_rgba, clip_t, color_from_components,
                      interpolate_rgba, BLACK};
pub use presets::Preset;
pub use scale::{ColorScale, Range};

/// The color type of scales.
pub type Color = RGBA<f64>;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue (in \[0, 255\]) and alpha (in
    /// \[0, 1\]) components of the color.
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGB (in \[0, 255\]) and alpha (in
    /// \[0, 1\]) components.  Integer encodings saturate.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8 }
    }
}

// 16 bits channels: 255 * 257 = 65535.
impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: (c.r * 257.) as u16,  g: (c.g * 257.) as u16,
                b: (c.b * 257.) as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 / 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8,
                a: (c.a * 255.) as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: self.a as f64 / 65535. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: (c.r * 257.) as u16,  g: (c.g * 257.) as u16,
                 b: (c.b * 257.) as u16,  a: (c.a * 65535.) as u16 }
    }
}
