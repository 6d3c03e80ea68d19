//! Ready made color stops.

use lazy_static::lazy_static;
use rgb::RGBA;

/// A named list of color stops with their positions.
pub struct Preset {
    name: &'static str,
    rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
    positions: Option<Vec<f64>>, // `None` for evenly spaced stops
}

impl Preset {
    fn new(name: &'static str, rgb: &[[f64; 3]],
           positions: Option<&[f64]>) -> Self {
        let rgb = rgb.iter()
            .map(|&[r, g, b]| RGBA { r, g, b, a: 1. })
            .collect();
        Preset { name, rgb, positions: positions.map(|p| p.to_vec()) }
    }

    /// Name of the preset (lowercase).
    pub fn name(&self) -> &'static str { self.name }

    /// The colors of the stops.
    pub fn colors(&self) -> &[RGBA<f64>] { &self.rgb }

    /// The positions of the stops, `None` if they are evenly spaced.
    pub fn positions(&self) -> Option<&[f64]> { self.positions.as_deref() }
}

lazy_static! {
    /// From black to white.
    pub static ref GRAYSCALE: Preset = Preset::new(
        "grayscale", &[[0., 0., 0.], [255., 255., 255.]], None);

    /// The classic heatmap gradient: blue, lime, yellow, red.  Values
    /// below a quarter of the domain are blue.
    pub static ref HEAT: Preset = Preset::new(
        "heat",
        &[[0., 0., 255.], [0., 255., 0.], [255., 255., 0.], [255., 0., 0.]],
        Some(&[0.25, 0.55, 0.85, 1.][..]));

    /// Matplotlib viridis color scheme, sampled at 5 points.
    pub static ref VIRIDIS: Preset = Preset::new(
        "viridis",
        &[[68., 1., 84.], [59., 82., 139.], [33., 145., 140.],
          [94., 201., 98.], [253., 231., 37.]],
        None);

    /// Brewer "Dark red to light yelow to dark blue" diverging scheme
    /// (5 classes).
    pub static ref RDYLBU: Preset = Preset::new(
        "rdylbu",
        &[[215., 25., 28.], [253., 174., 97.], [255., 255., 191.],
          [171., 217., 233.], [44., 123., 182.]],
        None);

    static ref ALL: Vec<&'static Preset> =
        vec![&*GRAYSCALE, &*HEAT, &*VIRIDIS, &*RDYLBU];
}

/// Return an iterator on all presets.
pub fn all() -> impl Iterator<Item = &'static Preset> {
    ALL.iter().copied()
}

/// Return the preset called `name` (case insensitive), if any.
pub fn by_name(name: &str) -> Option<&'static Preset> {
    all().find(|p| p.name.eq_ignore_ascii_case(name))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed() {
        for p in all() {
            assert!(p.colors().len() >= 2, "{}", p.name());
            if let Some(pos) = p.positions() {
                assert_eq!(pos.len(), p.colors().len(), "{}", p.name());
                assert!(pos.windows(2).all(|w| w[0] <= w[1]), "{}", p.name());
            }
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(by_name("Viridis").map(|p| p.name()), Some("viridis"));
        assert!(by_name("jet").is_none());
    }
}
