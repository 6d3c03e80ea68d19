//! Plain data description of a [`ColorScale`] and its strict
//! validation.

use thiserror::Error;
use crate::ColorScale;

/// The configuration of a [`ColorScale`]: colors as 3 or 4 components
/// (R, G, B in \[0, 255\], optional A in \[0, 1\]), optional stop
/// positions and optional domain edges.
///
/// With the `serde` feature, it can be read from and written to any
/// serde format:
///
/// ```json
/// { "colors": [[0, 0, 0], [255, 255, 255, 0.5]], "domain": [0, 100] }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleConfig {
    pub colors: Vec<Vec<f64>>,
    #[cfg_attr(feature = "serde",
               serde(default, skip_serializing_if = "Option::is_none"))]
    pub positions: Option<Vec<f64>>,
    #[cfg_attr(feature = "serde",
               serde(default, skip_serializing_if = "Option::is_none"))]
    pub domain: Option<Vec<f64>>,
}

/// Why a [`ScaleConfig`] was rejected by [`ScaleConfig::build`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaleError {
    #[error("no colors given")]
    NoColors,
    #[error("color {index} has {len} components, expected 3 or 4")]
    MalformedColor { index: usize, len: usize },
    #[error("{positions} positions given for {colors} colors")]
    PositionCountMismatch { colors: usize, positions: usize },
    #[error("position {index} is {value}, not in [0, 1]")]
    PositionOutOfRange { index: usize, value: f64 },
    #[error("position {index} is smaller than the previous one")]
    PositionsNotAscending { index: usize },
    #[error("the domain has {len} edges, at least 2 are needed")]
    DomainTooShort { len: usize },
    #[error("domain edge {index} is not finite")]
    DomainNotFinite { index: usize },
    #[error("domain edge {index} is not larger than the previous one")]
    DomainNotAscending { index: usize },
}

impl ScaleConfig {
    /// Check that the configuration is well formed: at least one
    /// color, each with 3 or 4 components; one position in \[0, 1\]
    /// per color, in non-decreasing order; at least 2 finite domain
    /// edges, strictly increasing when there are more than 2.
    pub fn validate(&self) -> Result<(), ScaleError> {
        use ScaleError::*;
        if self.colors.is_empty() { return Err(NoColors) }
        for (index, c) in self.colors.iter().enumerate() {
            if !(3 ..= 4).contains(&c.len()) {
                return Err(MalformedColor { index, len: c.len() })
            }
        }
        if let Some(positions) = &self.positions {
            if positions.len() != self.colors.len() {
                return Err(PositionCountMismatch {
                    colors: self.colors.len(), positions: positions.len() })
            }
            for (index, &value) in positions.iter().enumerate() {
                if !(0. ..= 1.).contains(&value) {
                    return Err(PositionOutOfRange { index, value })
                }
                if index > 0 && value < positions[index - 1] {
                    return Err(PositionsNotAscending { index })
                }
            }
        }
        if let Some(domain) = &self.domain {
            if domain.len() < 2 {
                return Err(DomainTooShort { len: domain.len() })
            }
            if let Some(index) = domain.iter().position(|e| !e.is_finite()) {
                return Err(DomainNotFinite { index })
            }
            if domain.len() > 2 {
                if let Some(i) = domain.windows(2).position(|w| w[0] >= w[1]) {
                    return Err(DomainNotAscending { index: i + 1 })
                }
            }
        }
        Ok(())
    }

    /// Validate the configuration and build the scale.
    pub fn build(&self) -> Result<ColorScale, ScaleError> {
        self.validate()?;
        Ok(self.build_lossy())
    }

    /// Build the scale without validation, the same way
    /// [`ColorScale::new`] and its setters do: malformed colors become
    /// opaque black and a domain with less than 2 edges is ignored.
    pub fn build_lossy(&self) -> ColorScale {
        let mut scale = ColorScale::new(&self.colors);
        scale.set_positions(self.positions.as_deref());
        if let Some(domain) = &self.domain {
            scale.set_domain(domain);
        }
        scale
    }
}

impl TryFrom<ScaleConfig> for ColorScale {
    type Error = ScaleError;

    fn try_from(config: ScaleConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl From<&ColorScale> for ScaleConfig {
    fn from(scale: &ColorScale) -> Self {
        ScaleConfig {
            colors: scale.colors().iter()
                .map(|c| vec![c.r, c.g, c.b, c.a])
                .collect(),
            positions: scale.explicit_positions().map(|p| p.to_vec()),
            domain: Some(scale.domain().edges()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Domain;
    use assert_approx_eq::assert_approx_eq;

    fn bw() -> ScaleConfig {
        ScaleConfig { colors: vec![vec![0., 0., 0.], vec![255., 255., 255.]],
                      ..Default::default() }
    }

    #[test]
    fn valid_config_builds() {
        let mut scale = bw().build().unwrap();
        assert_approx_eq!(scale.map(0.5).r, 127.5);
        let mut scale = ColorScale::try_from(ScaleConfig {
            domain: Some(vec![0., 10., 20.]), ..bw() }).unwrap();
        assert_eq!(scale.map(15.).r, 255.);
    }

    #[test]
    fn rejects() {
        use ScaleError::*;
        assert_eq!(ScaleConfig::default().build().err(), Some(NoColors));
        let c = ScaleConfig { colors: vec![vec![0., 0.]], ..bw() };
        assert_eq!(c.validate(), Err(MalformedColor { index: 0, len: 2 }));
        let c = ScaleConfig { positions: Some(vec![0.]), ..bw() };
        assert_eq!(c.validate(),
                   Err(PositionCountMismatch { colors: 2, positions: 1 }));
        let c = ScaleConfig { positions: Some(vec![0., 1.5]), ..bw() };
        assert_eq!(c.validate(),
                   Err(PositionOutOfRange { index: 1, value: 1.5 }));
        let c = ScaleConfig { positions: Some(vec![0.5, 0.2]), ..bw() };
        assert_eq!(c.validate(), Err(PositionsNotAscending { index: 1 }));
        let c = ScaleConfig { domain: Some(vec![3.]), ..bw() };
        assert_eq!(c.validate(), Err(DomainTooShort { len: 1 }));
        let c = ScaleConfig { domain: Some(vec![0., f64::NAN]), ..bw() };
        assert_eq!(c.validate(), Err(DomainNotFinite { index: 1 }));
        let c = ScaleConfig { domain: Some(vec![0., 5., 5.]), ..bw() };
        assert_eq!(c.validate(), Err(DomainNotAscending { index: 2 }));
    }

    #[test]
    fn reversed_continuous_domain_is_valid() {
        let c = ScaleConfig { domain: Some(vec![1., 0.]), ..bw() };
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(ScaleError::DomainTooShort { len: 1 }.to_string(),
                   "the domain has 1 edges, at least 2 are needed");
    }

    #[test]
    fn lossy_build_keeps_defaults() {
        let c = ScaleConfig { domain: Some(vec![3.]), ..bw() };
        let scale = c.build_lossy();
        assert_eq!(scale.domain(), &Domain::default());
    }

    #[test]
    fn from_scale() {
        let scale = ColorScale::new(&[[0., 0., 0.], [255., 0., 0.]])
            .with_domain(&[0., 50., 100.]);
        let c = ScaleConfig::from(&scale);
        assert_eq!(c.colors, vec![vec![0., 0., 0., 1.], vec![255., 0., 0., 1.]]);
        assert_eq!(c.positions, None);
        assert_eq!(c.domain, Some(vec![0., 50., 100.]));
        assert_eq!(c.build().unwrap().config(), c);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json() {
        let c: ScaleConfig = serde_json::from_str(
            r#"{ "colors": [[0, 0, 0], [255, 255, 255, 0.5]],
                 "domain": [0, 100] }"#).unwrap();
        assert_eq!(c.positions, None);
        let mut scale = c.build().unwrap();
        assert_approx_eq!(scale.map(50.).a, 0.75);
        let s = serde_json::to_string(&bw()).unwrap();
        assert_eq!(s, r#"{"colors":[[0.0,0.0,0.0],[255.0,255.0,255.0]]}"#);
    }
}
