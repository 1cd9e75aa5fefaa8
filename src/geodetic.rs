//! ECEF to geodetic coordinates conversion.
//!
//! Latitude and altitude are resolved with Bowring's scheme iterated on the
//! reduced latitude, which converges in two or three rounds for any point
//! between the deepest trench and low orbit. Altitude uses the expression
//! `h = p cos φ + z sin φ - a √(1 - e² sin² φ)` which stays well conditioned
//! both at the poles and at the equator.
//!
//! Points that are too close to the Earth's center (inside the sphere that
//! contains the ellipsoid evolute) do not have a unique geodetic solution:
//! they are always rejected with [Error::DegenerateInput], never converted
//! to a plausible looking value.
use std::f64::consts::{FRAC_PI_2, PI};

use thiserror::Error;

use crate::{
    constants::Solver,
    ellipsoid::Ellipsoid,
    position::{EcefPosition, GeodeticPosition},
};

#[cfg(feature = "log")]
use log::debug;

/// Coordinates conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("no position to convert")]
    EmptyInput,
    #[error("non finite coordinates {0}")]
    NonFiniteCoordinates(EcefPosition),
    #[error("{0} is too close to the Earth's center: geodetically undefined")]
    DegenerateInput(EcefPosition),
    #[error("sample #{index}: {source}")]
    InvalidSample { index: usize, source: Box<Error> },
}

/// Converts one ECEF position to geodetic coordinates, with respect to
/// given [Ellipsoid].
pub fn ecef_to_geodetic(
    ecef: EcefPosition,
    ellipsoid: &Ellipsoid,
) -> Result<GeodeticPosition, Error> {
    if !ecef.is_finite() {
        return Err(Error::NonFiniteCoordinates(ecef));
    }
    if ecef.norm() <= ellipsoid.evolute_radius {
        return Err(Error::DegenerateInput(ecef));
    }

    let (x, y, z) = (ecef.x, ecef.y, ecef.z);
    let (a, b) = (ellipsoid.a, ellipsoid.b);

    // atan2 returns [-π, π]: -π is folded to keep longitudes in (-180°, 180°]
    let mut lon = y.atan2(x);
    if lon <= -PI {
        lon = PI;
    }

    let p = x.hypot(y);

    let lat = if p == 0.0 {
        // polar axis: longitude is arbitrary
        FRAC_PI_2.copysign(z)
    } else {
        let b_over_a = 1.0 - ellipsoid.f;
        let mut beta = z.atan2(b_over_a * p);
        let mut lat = beta;
        for _ in 0..Solver::MAX_ITERATIONS {
            let (sin_beta, cos_beta) = beta.sin_cos();
            lat = (z + ellipsoid.ep2 * b * sin_beta.powi(3))
                .atan2(p - ellipsoid.e2 * a * cos_beta.powi(3));

            let (sin_lat, cos_lat) = lat.sin_cos();
            let next = (b_over_a * sin_lat).atan2(cos_lat);
            let delta = (next - beta).abs();
            beta = next;
            if delta <= Solver::CONVERGENCE_RAD {
                break;
            }
        }
        lat
    };

    let (sin_lat, cos_lat) = lat.sin_cos();
    let alt = p * cos_lat + z * sin_lat - a * (1.0 - ellipsoid.e2 * sin_lat * sin_lat).sqrt();

    Ok(GeodeticPosition::new(lon.to_degrees(), lat.to_degrees(), alt))
}

/// Converts geodetic coordinates back to ECEF, with respect to given [Ellipsoid].
pub fn geodetic_to_ecef(geo: GeodeticPosition, ellipsoid: &Ellipsoid) -> EcefPosition {
    let (lat, lon) = (geo.latitude_ddeg.to_radians(), geo.longitude_ddeg.to_radians());
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    let n = ellipsoid.prime_vertical_radius(lat);
    let h = geo.altitude_m;
    EcefPosition::new(
        (n + h) * cos_lat * cos_lon,
        (n + h) * cos_lat * sin_lon,
        (n * (1.0 - ellipsoid.e2) + h) * sin_lat,
    )
}

/// [CoordinateConverter] converts ECEF samples to geodetic coordinates.
/// It only holds its reference [Ellipsoid]: it is a pure function of its input,
/// cheap to copy and safe to share between threads.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CoordinateConverter {
    ellipsoid: Ellipsoid,
}

impl CoordinateConverter {
    /// Builds a new [CoordinateConverter] using given reference [Ellipsoid]
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    /// [CoordinateConverter] referenced to WGS84
    pub fn wgs84() -> Self {
        Self::new(Ellipsoid::WGS84)
    }

    /// Reference [Ellipsoid]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Converts a single sample
    pub fn convert_one(&self, ecef: EcefPosition) -> Result<GeodeticPosition, Error> {
        ecef_to_geodetic(ecef, &self.ellipsoid)
    }

    /// Converts a batch of samples. Output has the same length and order
    /// as the input. Aborts on the first invalid sample.
    pub fn convert(&self, samples: &[EcefPosition]) -> Result<Vec<GeodeticPosition>, Error> {
        if samples.is_empty() {
            return Err(Error::EmptyInput);
        }
        let converted = samples
            .iter()
            .enumerate()
            .map(|(index, ecef)| {
                self.convert_one(*ecef)
                    .map_err(|e| Error::InvalidSample {
                        index,
                        source: Box::new(e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "log")]
        debug!("{} samples converted", converted.len());

        Ok(converted)
    }

    /// Forward transform, mostly used to synthesize trajectories
    pub fn to_ecef(&self, geo: GeodeticPosition) -> EcefPosition {
        geodetic_to_ecef(geo, &self.ellipsoid)
    }
}

impl EcefPosition {
    /// Converts Self to WGS84 geodetic coordinates
    pub fn to_geodetic_wgs84(&self) -> Result<GeodeticPosition, Error> {
        ecef_to_geodetic(*self, &Ellipsoid::WGS84)
    }
}

impl GeodeticPosition {
    /// Converts Self to ECEF, assuming WGS84 coordinates
    pub fn to_ecef_wgs84(&self) -> EcefPosition {
        geodetic_to_ecef(*self, &Ellipsoid::WGS84)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const DEG_TOLERANCE: f64 = 1.0E-7;
    const ALT_TOLERANCE_M: f64 = 1.0E-3;

    fn converter() -> CoordinateConverter {
        CoordinateConverter::wgs84()
    }

    #[test]
    fn equator_prime_meridian() {
        let geo = converter()
            .convert_one(EcefPosition::new(6378137.0, 0.0, 0.0))
            .unwrap();
        assert!(geo.longitude_ddeg.abs() < 1.0E-6);
        assert!(geo.latitude_ddeg.abs() < 1.0E-6);
        assert!(geo.altitude_m.abs() < ALT_TOLERANCE_M);
    }

    #[test]
    fn equator_quadrants() {
        let a = Ellipsoid::WGS84.a;
        for (x, y, lon) in [
            (0.0, a, 90.0),
            (-a, 0.0, 180.0),
            (-a, -0.0, 180.0),
            (0.0, -a, -90.0),
        ] {
            let geo = converter().convert_one(EcefPosition::new(x, y, 0.0)).unwrap();
            assert!(
                (geo.longitude_ddeg - lon).abs() < 1.0E-9,
                "({}, {}): expecting {}°, got {}°",
                x,
                y,
                lon,
                geo.longitude_ddeg
            );
            assert!(geo.latitude_ddeg.abs() < 1.0E-9);
            assert!(geo.altitude_m.abs() < ALT_TOLERANCE_M);
        }
    }

    #[test]
    fn poles() {
        let north = converter()
            .convert_one(EcefPosition::new(0.0, 0.0, 6356752.314245))
            .unwrap();
        assert!((north.latitude_ddeg - 90.0).abs() < 1.0E-6);
        assert!(north.altitude_m.abs() < ALT_TOLERANCE_M);
        assert!(north.longitude_ddeg.is_finite());

        let south = converter()
            .convert_one(EcefPosition::new(0.0, 0.0, -6356752.314245 - 1500.0))
            .unwrap();
        assert!((south.latitude_ddeg + 90.0).abs() < 1.0E-6);
        assert!((south.altitude_m - 1500.0).abs() < ALT_TOLERANCE_M);
    }

    #[test]
    fn close_to_polar_axis() {
        let north = converter()
            .convert_one(EcefPosition::new(1.0E-3, -1.0E-3, 6356752.314245 + 10.0))
            .unwrap();
        assert!((north.latitude_ddeg - 90.0).abs() < 1.0E-6);
        assert!((north.altitude_m - 10.0).abs() < ALT_TOLERANCE_M);
        assert!((north.longitude_ddeg + 45.0).abs() < 1.0E-6);
    }

    #[test]
    fn degenerate_inputs() {
        let center = EcefPosition::default();
        assert_eq!(
            converter().convert_one(center),
            Err(Error::DegenerateInput(center))
        );

        let evolute = Ellipsoid::WGS84.evolute_radius;
        for pos in [
            EcefPosition::new(1.0, 0.0, 0.0),
            EcefPosition::new(30_000.0, 0.0, 0.0),
            EcefPosition::new(0.0, 0.0, -evolute),
            EcefPosition::new(10_000.0, 10_000.0, 10_000.0),
        ] {
            assert_eq!(
                converter().convert_one(pos),
                Err(Error::DegenerateInput(pos)),
                "{} should be rejected",
                pos
            );
        }

        // right outside of the evolute: defined, and latitude is sane
        let geo = converter()
            .convert_one(EcefPosition::new(evolute + 1.0, 0.0, 0.0))
            .unwrap();
        assert!(geo.latitude_ddeg.abs() < 1.0E-9);
        assert!(geo.altitude_m < 0.0);
    }

    #[test]
    fn non_finite_inputs() {
        for pos in [
            EcefPosition::new(f64::NAN, 0.0, 6378137.0),
            EcefPosition::new(0.0, f64::INFINITY, 0.0),
            EcefPosition::new(6378137.0, 0.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                converter().convert_one(pos),
                Err(Error::NonFiniteCoordinates(_))
            ));
        }
    }

    #[test]
    fn empty_batch() {
        assert_eq!(converter().convert(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn batch_error_reports_index() {
        let samples = [
            EcefPosition::new(6378137.0, 0.0, 0.0),
            EcefPosition::new(0.0, 6378137.0, 0.0),
            EcefPosition::default(),
            EcefPosition::new(0.0, 0.0, 6356752.314245),
        ];
        match converter().convert(&samples) {
            Err(Error::InvalidSample { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(*source, Error::DegenerateInput(EcefPosition::default()));
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn batch_matches_singletons() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = (0..256)
            .map(|_| {
                GeodeticPosition::new(
                    rng.gen_range(-180.0..180.0),
                    rng.gen_range(-90.0..90.0),
                    rng.gen_range(-1000.0..100_000.0),
                )
                .to_ecef_wgs84()
            })
            .collect::<Vec<_>>();

        let batch = converter().convert(&samples).unwrap();
        assert_eq!(batch.len(), samples.len());

        for (ecef, geo) in samples.iter().zip(batch.iter()) {
            let single = converter().convert_one(*ecef).unwrap();
            assert_eq!(&single, geo);
        }
    }

    #[test]
    fn random_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let lat = rng.gen_range(-89.99..89.99);
            let lon = rng.gen_range(-179.99..179.99);
            let alt = rng.gen_range(-1000.0..100_000.0);

            // independent forward transform
            let (x, y, z) = map_3d::geodetic2ecef(
                f64::to_radians(lat),
                f64::to_radians(lon),
                alt,
                map_3d::Ellipsoid::WGS84,
            );

            let geo = converter().convert_one(EcefPosition::new(x, y, z)).unwrap();
            assert!(
                (geo.latitude_ddeg - lat).abs() < DEG_TOLERANCE,
                "latitude error: {} vs {}",
                geo.latitude_ddeg,
                lat
            );
            assert!(
                (geo.longitude_ddeg - lon).abs() < DEG_TOLERANCE,
                "longitude error: {} vs {}",
                geo.longitude_ddeg,
                lon
            );
            assert!(
                (geo.altitude_m - alt).abs() < ALT_TOLERANCE_M,
                "altitude error: {} vs {}",
                geo.altitude_m,
                alt
            );
        }
    }

    #[test]
    fn latitude_accuracy() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let reference = GeodeticPosition::new(
                rng.gen_range(-180.0..180.0),
                rng.gen_range(-90.0..90.0),
                rng.gen_range(-1000.0..100_000.0),
            );
            let geo = converter()
                .convert_one(converter().to_ecef(reference))
                .unwrap();
            let error_rad = (geo.latitude_ddeg - reference.latitude_ddeg)
                .to_radians()
                .abs();
            assert!(error_rad <= 1.0E-9, "latitude error {:e} rad", error_rad);
            assert!((geo.altitude_m - reference.altitude_m).abs() < ALT_TOLERANCE_M);
        }
    }

    #[test]
    fn forward_transform() {
        for (lat, lon, alt) in [
            (0.0, 0.0, 0.0),
            (48.8566, 2.3522, 35.0),
            (-33.8688, 151.2093, -12.5),
            (64.1466, -21.9426, 99_000.0),
        ] {
            let ecef = GeodeticPosition::new(lon, lat, alt).to_ecef_wgs84();
            let (x, y, z) = map_3d::geodetic2ecef(
                f64::to_radians(lat),
                f64::to_radians(lon),
                alt,
                map_3d::Ellipsoid::WGS84,
            );
            assert!((ecef.x - x).abs() < 1.0E-6);
            assert!((ecef.y - y).abs() < 1.0E-6);
            assert!((ecef.z - z).abs() < 1.0E-6);
        }
    }

    #[test]
    fn converter_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<CoordinateConverter>();
    }
}
