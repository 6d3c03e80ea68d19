//! The color scale and its legend sampler.

use std::borrow::Cow;
use rgb::RGBA;
use crate::{
    cache::ColorCache,
    config::ScaleConfig,
    domain::Domain,
    interpolate::{color_from_components, clip_t, interpolate_rgba, BLACK},
    presets::Preset,
    ColorRange, RGBColor,
};

/// Where the color stops sit on \[0, 1\].
#[derive(Clone, Debug)]
enum Positions {
    /// `i / (n - 1)` for the `n` colors currently configured.
    Even,
    Explicit(Vec<f64>),
}

/// Maps numbers to colors.
///
/// A scale is made of color stops (a color and its position in
/// \[0, 1\]) and a [`Domain`].  A value is first normalized by the
/// domain to an interpolation fraction `t`, then the color is
/// interpolated linearly between the two stops surrounding `t`.
///
/// All operations are total: invalid configurations degrade to
/// defaults and [`ColorScale::map`] returns opaque black when no color
/// can be determined.  Use [`ScaleConfig::build`] to reject invalid
/// configurations instead.
///
/// Resolved colors are memoized by `t` (quantized to 4 decimals), so
/// `map` takes `&mut self`.  Share a scale between owners with
/// `Rc<RefCell<ColorScale>>` or `Arc<Mutex<ColorScale>>`; every
/// reconfiguration is then seen by all of them.
///
/// # Example
///
/// ```
/// use rgb_scale::ColorScale;
/// let mut scale = ColorScale::new(&[[0., 0., 0.], [255., 255., 255.]])
///     .with_domain(&[0., 100.]);
/// assert_eq!(scale.map(50.).r, 127.5);
/// assert_eq!(scale.map(200.).r, 255.);
/// ```
#[derive(Clone, Debug)]
pub struct ColorScale {
    colors: Vec<RGBA<f64>>,
    positions: Positions,
    domain: Domain,
    cache: ColorCache,
}

impl ColorScale {
    /// Create a scale with evenly spaced `colors` over the domain
    /// \[0, 1\].  Each color has 3 (alpha is then `1.`) or 4
    /// components; see [`color_from_components`] for other lengths.
    pub fn new<C: AsRef<[f64]>>(colors: &[C]) -> Self {
        let mut scale = ColorScale {
            colors: vec![],
            positions: Positions::Even,
            domain: Domain::default(),
            cache: ColorCache::default(),
        };
        scale.set_colors(colors);
        scale
    }

    /// Create a scale from colors of any [`RGBColor`] type.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use rgb_scale::ColorScale;
    /// let mut scale = ColorScale::from_colors(
    ///     [RGB8::new(255, 0, 0), RGB8::new(0, 0, 255)]);
    /// assert_eq!(scale.map(0.5).b, 127.5);
    /// ```
    pub fn from_colors<Color: RGBColor>(
        colors: impl IntoIterator<Item = Color>) -> Self {
        let colors: Vec<_> = colors.into_iter()
            .map(|c| { let c = c.to_rgba(); [c.r, c.g, c.b, c.a] })
            .collect();
        Self::new(&colors)
    }

    /// Create a scale from a [`Preset`] over the domain \[0, 1\].
    pub fn from_preset(preset: &Preset) -> Self {
        let colors: Vec<_> = preset.colors().iter()
            .map(|c| [c.r, c.g, c.b, c.a])
            .collect();
        let mut scale = Self::new(&colors);
        scale.set_positions(preset.positions());
        scale
    }

    /// Builder version of [`ColorScale::set_positions`].
    pub fn with_positions(mut self, positions: &[f64]) -> Self {
        self.set_positions(Some(positions));
        self
    }

    /// Builder version of [`ColorScale::set_domain`].
    pub fn with_domain(mut self, edges: &[f64]) -> Self {
        self.set_domain(edges);
        self
    }

    /// Replace the colors.  Components are not clamped here, only when
    /// colors are blended.
    pub fn set_colors<C: AsRef<[f64]>>(&mut self, colors: &[C]) -> &mut Self {
        self.cache.clear();
        self.colors = colors.iter()
            .map(|c| color_from_components(c.as_ref()))
            .collect();
        self
    }

    /// Set the positions of the color stops.  They are used as given
    /// and should be ascending, in \[0, 1\], one per color.  `None`
    /// spaces the stops evenly, also after later calls to
    /// [`ColorScale::set_colors`].
    pub fn set_positions(&mut self, positions: Option<&[f64]>) -> &mut Self {
        self.cache.clear();
        self.positions = match positions {
            Some(p) => Positions::Explicit(p.to_vec()),
            None => Positions::Even,
        };
        self
    }

    /// Set the domain: continuous with 2 edges, classed with more (see
    /// [`Domain`]).  Less than 2 edges leave the scale unchanged.
    pub fn set_domain(&mut self, edges: &[f64]) -> &mut Self {
        if let Some(domain) = Domain::from_edges(edges) {
            self.cache.clear();
            self.domain = domain;
        }
        self
    }

    /// The colors of the stops, with 4 components.
    pub fn colors(&self) -> &[RGBA<f64>] { &self.colors }

    /// The positions of the stops.
    ///
    /// ```
    /// use rgb_scale::ColorScale;
    /// let scale = ColorScale::new(&[[0., 0., 0.], [9., 9., 9.], [255., 0., 0.]]);
    /// assert_eq!(&scale.positions()[..], &[0., 0.5, 1.]);
    /// ```
    pub fn positions(&self) -> Cow<'_, [f64]> {
        match &self.positions {
            Positions::Explicit(p) => Cow::Borrowed(p.as_slice()),
            Positions::Even => {
                let n = self.colors.len();
                if n == 1 { return Cow::Owned(vec![0.]) }
                let last = n.saturating_sub(1) as f64;
                Cow::Owned((0 .. n).map(|i| i as f64 / last).collect())
            }
        }
    }

    pub(crate) fn explicit_positions(&self) -> Option<&[f64]> {
        match &self.positions {
            Positions::Explicit(p) => Some(p.as_slice()),
            Positions::Even => None,
        }
    }

    pub fn domain(&self) -> &Domain { &self.domain }

    /// Return the current configuration.
    pub fn config(&self) -> ScaleConfig { ScaleConfig::from(self) }

    /// Return the color of `value`.  NaN is treated as `0.`.
    pub fn map(&mut self, value: f64) -> RGBA<f64> {
        let value = if value.is_nan() { 0. } else { value };
        let t = self.domain.fraction(value);
        let key = ColorCache::key(t);
        if let Some(c) = self.cache.get(key) { return c }
        match self.stop_color(t) {
            Some(c) => { self.cache.insert(key, c); c }
            None => BLACK,
        }
    }

    /// Same as [`ColorScale::map`] but converts the color.
    ///
    /// ```
    /// use rgb::RGBA8;
    /// use rgb_scale::ColorScale;
    /// let mut scale = ColorScale::new(&[[0., 0., 0., 0.], [255., 255., 255., 1.]]);
    /// assert_eq!(scale.map_as::<RGBA8>(1.), RGBA8::new(255, 255, 255, 255));
    /// ```
    #[inline]
    pub fn map_as<Color: RGBColor>(&mut self, value: f64) -> Color {
        Color::from_rgba(self.map(value))
    }

    /// Return the color at the interpolation fraction `t`, or `None`
    /// if the stops do not cover `t`.
    fn stop_color(&self, t: f64) -> Option<RGBA<f64>> {
        let positions = self.positions();
        let last = positions.len().checked_sub(1)?;
        for (i, &p) in positions.iter().enumerate() {
            if t <= p || (t >= p && i == last) {
                return self.colors.get(i).copied()
            }
            if let Some(&next) = positions.get(i + 1) {
                if t > p && t < next {
                    let c0 = self.colors.get(i).copied().unwrap_or(BLACK);
                    let c1 = self.colors.get(i + 1).copied().unwrap_or(BLACK);
                    return Some(interpolate_rgba(c0, c1, (t - p) / (next - p)))
                }
            }
        }
        None
    }

    /// Return an iterator yielding `n` values evenly spaced over the
    /// domain, bounds included, together with their colors.  Handy to
    /// draw a legend.
    ///
    /// ```
    /// use rgb_scale::ColorScale;
    /// let mut scale = ColorScale::new(&[[0., 0., 0.], [255., 255., 255.]])
    ///     .with_domain(&[0., 100.]);
    /// let values: Vec<_> = scale.range(3).map(|(x, _)| x).collect();
    /// assert_eq!(values, [0., 50., 100.]);
    /// ```
    pub fn range(&mut self, n: usize) -> Range<'_> {
        let mut a = self.domain.min();
        let mut b = self.domain.max();
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        if n == 0 {
            Range { scale: self, a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { scale: self, a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<Color: RGBColor> ColorRange<Color> for ColorScale {
    /// Returns the color at the interpolation fraction `t` ∈ \[0, 1\]
    /// of the stops, bypassing the domain and the cache.
    fn rgb(&self, t: f64) -> Color {
        Color::from_rgba(self.stop_color(clip_t(t)).unwrap_or(BLACK))
    }
}

/// An iterator yielding values of the domain of a [`ColorScale`]
/// together with their colors.
///
/// Created by [`ColorScale::range`].
pub struct Range<'a> {
    scale: &'a mut ColorScale,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl Range<'_> {
    /// Return the value at position `k` (assuming it is in the range
    /// `0 ..= self.last`) and its color.
    fn value(&mut self, k: usize) -> (f64, RGBA<f64>) {
        let x = if k == 0 {
            self.a
        } else if k == self.last {
            self.b
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                let t = beta / self.flast;
                (1. - t) * self.a + t * self.b
            } else { x }
        };
        (x, self.scale.map(x))
    }

    fn remaining(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl Iterator for Range<'_> {
    type Item = (f64, RGBA<f64>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.value(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Range<'_> {}

impl DoubleEndedIterator for Range<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.value(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}
