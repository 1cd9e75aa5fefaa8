//! Position types
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cartesian position in the Earth-Centered-Earth-Fixed frame, in meters.
#[derive(Default, Copy, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcefPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EcefPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    /// Distance to the Earth's center [m]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
    /// True if all coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for EcefPosition {
    fn from(xyz: (f64, f64, f64)) -> Self {
        Self::new(xyz.0, xyz.1, xyz.2)
    }
}

impl From<EcefPosition> for (f64, f64, f64) {
    fn from(pos: EcefPosition) -> Self {
        (pos.x, pos.y, pos.z)
    }
}

impl std::fmt::Display for EcefPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ECEF ({:.3}m {:.3}m {:.3}m)", self.x, self.y, self.z)
    }
}

/// Geodetic position with respect to a reference ellipsoid.
/// Angles are expressed in decimal degrees.
#[derive(Default, Copy, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPosition {
    /// Longitude in (-180°, 180°]
    pub longitude_ddeg: f64,
    /// Latitude in [-90°, 90°]
    pub latitude_ddeg: f64,
    /// Altitude above the ellipsoid [m]
    pub altitude_m: f64,
}

impl GeodeticPosition {
    pub fn new(longitude_ddeg: f64, latitude_ddeg: f64, altitude_m: f64) -> Self {
        Self {
            longitude_ddeg,
            latitude_ddeg,
            altitude_m,
        }
    }
}

/// (longitude, latitude, altitude) triplet, in this order.
impl From<GeodeticPosition> for (f64, f64, f64) {
    fn from(geo: GeodeticPosition) -> Self {
        (geo.longitude_ddeg, geo.latitude_ddeg, geo.altitude_m)
    }
}

impl std::fmt::Display for GeodeticPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "(lon={:.7}°, lat={:.7}°, alt={:.3}m)",
            self.longitude_ddeg, self.latitude_ddeg, self.altitude_m
        )
    }
}
