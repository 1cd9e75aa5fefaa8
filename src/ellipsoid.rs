//! Reference ellipsoid
use crate::constants::Wgs84;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Ellipsoid] of revolution used as geodetic reference.
/// Every quantity the conversions need is computed once, at construction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis [m]
    pub a: f64,
    /// Flattening
    pub f: f64,
    /// Semi-minor axis [m]
    pub b: f64,
    /// First eccentricity squared
    pub e2: f64,
    /// Second eccentricity squared
    pub ep2: f64,
    /// Radius of the smallest sphere containing the evolute [m]
    pub evolute_radius: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    /// World Geodetic System 1984
    pub const WGS84: Self = Self {
        a: Wgs84::SEMI_MAJOR_AXIS,
        f: Wgs84::FLATTENING,
        b: Wgs84::SEMI_MINOR_AXIS,
        e2: Wgs84::E2,
        ep2: Wgs84::EP2,
        evolute_radius: Wgs84::EVOLUTE_RADIUS,
    };

    /// Builds a custom [Ellipsoid] from its semi-major axis (in meters)
    /// and its inverse flattening.
    pub fn new(semi_major_axis: f64, inverse_flattening: f64) -> Self {
        let a = semi_major_axis;
        let f = 1.0 / inverse_flattening;
        let b = a * (1.0 - f);
        let e2 = f * (2.0 - f);
        Self {
            a,
            f,
            b,
            e2,
            ep2: e2 / (1.0 - e2),
            evolute_radius: (a * a - b * b) / b,
        }
    }

    /// Prime vertical radius of curvature at given geodetic latitude (in radians)
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.a / (1.0 - self.e2 * sin_lat * sin_lat).sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn wgs84_matches_defining_parameters() {
        let custom = Ellipsoid::new(6378137.0, 298.257223563);
        let wgs84 = Ellipsoid::WGS84;
        assert!((custom.b - wgs84.b).abs() < 1.0E-6);
        assert!((custom.e2 - wgs84.e2).abs() < 1.0E-15);
        assert!((custom.ep2 - wgs84.ep2).abs() < 1.0E-15);
        assert!((custom.evolute_radius - wgs84.evolute_radius).abs() < 1.0E-6);
        assert_eq!(Ellipsoid::default(), Ellipsoid::WGS84);
    }
    #[test]
    fn prime_vertical_radius() {
        let wgs84 = Ellipsoid::WGS84;
        assert_eq!(wgs84.prime_vertical_radius(0.0), wgs84.a);
        // a²/b at the poles
        let polar = wgs84.a * wgs84.a / wgs84.b;
        let n = wgs84.prime_vertical_radius(std::f64::consts::FRAC_PI_2);
        assert!((n - polar).abs() < 1.0E-6);
    }
}
