//! Memoization of resolved colors.

use std::collections::HashMap;
use rgb::RGBA;

/// Number of cache slots per unit of the interpolation fraction.
const RESOLUTION: f64 = 10_000.;

/// Colors already resolved, keyed by the interpolation fraction `t`
/// quantized to 4 decimals.
///
/// Continuous scales have `t` ∈ \[0, 1\] and classed scales
/// `t` ∈ \[-1, 2\], so keys stay in `-10_000 ..= 20_000` and the cache
/// never holds more than 30001 colors.  There is no eviction; the
/// cache is cleared when the scale is reconfigured.
#[derive(Clone, Debug, Default)]
pub(crate) struct ColorCache {
    colors: HashMap<i64, RGBA<f64>>,
}

impl ColorCache {
    /// Return the cache key of the interpolation fraction `t`.
    #[inline]
    pub(crate) fn key(t: f64) -> i64 { (t * RESOLUTION).floor() as i64 }

    #[inline]
    pub(crate) fn get(&self, key: i64) -> Option<RGBA<f64>> {
        self.colors.get(&key).copied()
    }

    #[inline]
    pub(crate) fn insert(&mut self, key: i64, c: RGBA<f64>) {
        self.colors.insert(key, c);
    }

    pub(crate) fn clear(&mut self) { self.colors.clear() }

    pub(crate) fn len(&self) -> usize { self.colors.len() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!(ColorCache::key(0.), 0);
        assert_eq!(ColorCache::key(1.), 10_000);
        assert_eq!(ColorCache::key(0.25), 2500);
        assert_eq!(ColorCache::key(0.123_45), 1234);
        assert_eq!(ColorCache::key(0.123_49), 1234);
        assert_eq!(ColorCache::key(-1.), -10_000);
        assert_eq!(ColorCache::key(2.), 20_000);
    }

    #[test]
    fn insert_and_clear() {
        let mut cache = ColorCache::default();
        let c = RGBA::new(1., 2., 3., 1.);
        cache.insert(42, c);
        assert_eq!(cache.get(42), Some(c));
        assert_eq!(cache.get(43), None);
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert_eq!(cache.get(42), None);
        assert_eq!(cache.len(), 0);
    }
}
