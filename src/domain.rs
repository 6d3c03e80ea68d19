//! Domains: how input values are normalized to an interpolation
//! fraction.

/// The range of values a [`ColorScale`][crate::ColorScale] accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    /// Values are normalized linearly: `min` goes to `t = 0.` and
    /// `max` to `t = 1.`, values outside are clamped.
    Continuous { min: f64, max: f64 },
    /// Values are binned by `edges` (at least 3 of them, so at least 2
    /// classes) and each class is mapped to one interpolation fraction.
    /// With fewer edges, every value gets the fraction `0.`.
    Classed { edges: Vec<f64> },
}

impl Default for Domain {
    fn default() -> Self { Domain::Continuous { min: 0., max: 1. } }
}

impl Domain {
    /// Return the domain with the given edges: continuous if there are
    /// two of them, classed if there are more.  Less than two edges do
    /// not define a domain.
    ///
    /// ```
    /// use rgb_scale::Domain;
    /// assert_eq!(Domain::from_edges(&[0., 100.]),
    ///            Some(Domain::Continuous { min: 0., max: 100. }));
    /// assert_eq!(Domain::from_edges(&[0., 10., 100.]).unwrap().num_classes(), 2);
    /// assert_eq!(Domain::from_edges(&[1.]), None);
    /// ```
    pub fn from_edges(edges: &[f64]) -> Option<Domain> {
        match *edges {
            [] | [_] => None,
            [min, max] => Some(Domain::Continuous { min, max }),
            _ => Some(Domain::Classed { edges: edges.to_vec() }),
        }
    }

    /// Returns the edges of the domain.
    pub fn edges(&self) -> Vec<f64> {
        match self {
            Domain::Continuous { min, max } => vec![*min, *max],
            Domain::Classed { edges } => edges.clone(),
        }
    }

    /// The first edge.
    pub fn min(&self) -> f64 {
        match self {
            Domain::Continuous { min, .. } => *min,
            Domain::Classed { edges } => edges.first().copied().unwrap_or(0.),
        }
    }

    /// The last edge.
    pub fn max(&self) -> f64 {
        match self {
            Domain::Continuous { max, .. } => *max,
            Domain::Classed { edges } => edges.last().copied().unwrap_or(0.),
        }
    }

    /// Number of classes: `0` for a continuous domain.
    pub fn num_classes(&self) -> usize {
        match self {
            Domain::Continuous { .. } => 0,
            Domain::Classed { edges } => edges.len().saturating_sub(1),
        }
    }

    /// Return the class of `value`: the number of leading edges `e`
    /// with `value >= e`, minus one.  Values below the first edge give
    /// `-1` and values at or above the last edge give the number of
    /// edges minus one.  An edge equal to `value` starts its class.
    ///
    /// ```
    /// use rgb_scale::Domain;
    /// let d = Domain::from_edges(&[0., 10., 20.]).unwrap();
    /// assert_eq!(d.class_of(-5.), -1);
    /// assert_eq!(d.class_of(9.9), 0);
    /// assert_eq!(d.class_of(10.), 1);
    /// assert_eq!(d.class_of(25.), 2);
    /// ```
    pub fn class_of(&self, value: f64) -> isize {
        let below = |edges: &[f64]| {
            edges.iter().position(|&e| !(value >= e)).unwrap_or(edges.len())
        };
        let n = match self {
            Domain::Continuous { min, max } => below(&[*min, *max][..]),
            Domain::Classed { edges } => below(edges.as_slice()),
        };
        n as isize - 1
    }

    /// Return the interpolation fraction of `value`.
    ///
    /// For a continuous domain, it is clamped to \[0, 1\] (and is `0.`
    /// when `min == max`).  For a classed domain it is
    /// `class / (num_classes - 1)` and is not clamped: values outside
    /// the edges give a fraction in \[-1, 0) or (1, 2\].
    pub fn fraction(&self, value: f64) -> f64 {
        match self {
            Domain::Continuous { min, max } => {
                let t = if min != max { (value - min) / (max - min) }
                        else { 0. };
                if t.is_nan() { 0. } else { t.clamp(0., 1.) }
            }
            Domain::Classed { .. } => {
                let last = self.num_classes().saturating_sub(1);
                if last == 0 { return 0. }
                self.class_of(value) as f64 / last as f64
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn default_is_unit() {
        let d = Domain::default();
        assert_eq!(d.edges(), vec![0., 1.]);
        assert_eq!(d.num_classes(), 0);
    }

    #[test]
    fn continuous_fraction() {
        let d = Domain::from_edges(&[0., 100.]).unwrap();
        assert_eq!(d.fraction(-1.), 0.);
        assert_approx_eq!(d.fraction(35.), 0.35);
        assert_eq!(d.fraction(100.), 1.);
        assert_eq!(d.fraction(1e300), 1.);
        assert_eq!(d.fraction(f64::INFINITY), 1.);
    }

    #[test]
    fn reversed_continuous() {
        let d = Domain::from_edges(&[10., 0.]).unwrap();
        assert_eq!(d.fraction(10.), 0.);
        assert_approx_eq!(d.fraction(2.5), 0.75);
        assert_eq!(d.fraction(-3.), 1.);
    }

    #[test]
    fn equal_bounds() {
        let d = Domain::from_edges(&[5., 5.]).unwrap();
        assert_eq!(d.fraction(5.), 0.);
        assert_eq!(d.fraction(6.), 0.);
        assert_eq!(d.fraction(4.), 0.);
    }

    #[test]
    fn classed_bounds_and_fraction() {
        let d = Domain::from_edges(&[0., 10., 20., 30.]).unwrap();
        assert_eq!(d.num_classes(), 3);
        assert_eq!(d.min(), 0.);
        assert_eq!(d.max(), 30.);
        assert_eq!(d.class_of(0.), 0);
        assert_eq!(d.class_of(19.999), 1);
        assert_eq!(d.class_of(20.), 2);
        assert_eq!(d.class_of(30.), 3);
        assert_eq!(d.fraction(-1.), -0.5);
        assert_eq!(d.fraction(0.), 0.);
        assert_eq!(d.fraction(15.), 0.5);
        assert_eq!(d.fraction(25.), 1.);
        assert_eq!(d.fraction(30.), 1.5);
    }

    #[test]
    fn class_scan_stops_at_first_larger_edge() {
        // Unsorted edges: the scan stops at 20 even though 5 <= 7.
        let d = Domain::from_edges(&[0., 20., 5.]).unwrap();
        assert_eq!(d.class_of(7.), 0);
        assert_eq!(d.class_of(f64::NAN), -1);
    }

    #[test]
    fn hand_built_single_class() {
        let d = Domain::Classed { edges: vec![0., 1.] };
        assert_eq!(d.fraction(0.5), 0.);
        let d = Domain::Classed { edges: vec![] };
        assert_eq!((d.min(), d.max(), d.num_classes()), (0., 0., 0));
        assert_eq!(d.fraction(3.), 0.);
    }
}
