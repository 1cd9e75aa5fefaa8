//! Geodesy constants

/// WGS84 defining parameters and the quantities we derive from them.
/// Derived values are stored rather than recomputed per sample.
pub(crate) struct Wgs84;

impl Wgs84 {
    /// Semi-major axis [m] (defining parameter)
    pub const SEMI_MAJOR_AXIS: f64 = 6378137.0;
    /// Inverse flattening (defining parameter)
    pub const INVERSE_FLATTENING: f64 = 298.257223563;
    /// Flattening f = 1/298.257223563
    pub const FLATTENING: f64 = 0.0033528106647474805;
    /// Semi-minor axis b = a(1-f) [m]
    pub const SEMI_MINOR_AXIS: f64 = 6356752.314245179;
    /// First eccentricity squared e² = f(2-f)
    pub const E2: f64 = 0.0066943799901413165;
    /// Second eccentricity squared e'² = e²/(1-e²)
    pub const EP2: f64 = 0.006739496742276434;
    /// Largest distance to the center of the ellipsoid evolute (a²-b²)/b [m]
    pub const EVOLUTE_RADIUS: f64 = 42841.31151331357;
}

/// Iterative solver settings
pub(crate) struct Solver;

impl Solver {
    /// Reduced latitude convergence threshold [rad]
    pub const CONVERGENCE_RAD: f64 = 1.0E-14;
    /// Bowring's scheme converges in 2 or 3 rounds on Earth, this only
    /// bounds the worst case.
    pub const MAX_ITERATIONS: u8 = 8;
}
