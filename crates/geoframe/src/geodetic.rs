//! Conversions between geodetic coordinates and ECEF.
//!
//! ECEF (Earth-Centered, Earth-Fixed) positions are Cartesian meters with the
//! origin at the Earth's center, x through the prime meridian on the equator
//! and z through the north pole.

use glam::DVec3;

use crate::ellipsoid::WGS84;

/// A geodetic position relative to the WGS84 ellipsoid.
///
/// Angles are in degrees, north and east positive. Values outside the usual
/// `[-90, 90]` / `[-180, 180]` ranges are accepted as-is; normalizing them is
/// up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geodetic {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Height above the ellipsoid in meters.
    pub alt: f64,
}

impl Geodetic {
    /// Create a new geodetic position.
    #[must_use]
    pub const fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }

    /// Convert to ECEF. See [`ecef_from_lla`].
    #[must_use]
    pub fn to_ecef(self) -> DVec3 {
        ecef_from_lla(self.lat, self.lon, self.alt)
    }

    /// Convert from ECEF. See [`lla_from_ecef`].
    #[must_use]
    pub fn from_ecef(ecef: DVec3) -> Self {
        lla_from_ecef(ecef)
    }
}

/// Convert latitude, longitude (degrees) and ellipsoidal height (meters) to
/// ECEF coordinates.
///
/// Defined for every finite input.
#[must_use]
pub fn ecef_from_lla(lat_deg: f64, lon_deg: f64, alt: f64) -> DVec3 {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();

    let a = WGS84.equatorial_radius;
    let axis_ratio_sq = (1.0 - WGS84.flattening).powi(2);

    // Prime-vertical radius of curvature, as a multiple of `a`.
    let c = 1.0 / (cos_lat * cos_lat + axis_ratio_sq * sin_lat * sin_lat).sqrt();
    let s = axis_ratio_sq * c;

    DVec3::new(
        (a * c + alt) * cos_lat * cos_lon,
        (a * c + alt) * cos_lat * sin_lon,
        (a * s + alt) * sin_lat,
    )
}

/// Convert ECEF coordinates to latitude, longitude (degrees) and ellipsoidal
/// height (meters).
///
/// Uses Bowring's closed-form approximation, with no iteration. Accuracy is
/// well below a millimeter for points near the surface. The returned longitude
/// lies in `[-180, 180]`.
///
/// Height loses precision close to the poles, where it is computed by
/// dividing by `cos(lat)`. At the poles themselves only the latitude is
/// meaningful.
#[must_use]
pub fn lla_from_ecef(ecef: DVec3) -> Geodetic {
    let a = WGS84.equatorial_radius;
    let b = WGS84.polar_radius();
    let e2 = WGS84.first_eccentricity_squared();
    let ep2 = WGS84.second_eccentricity_squared();

    let p = ecef.x.hypot(ecef.y);
    let theta = (ecef.z * a).atan2(p * b);
    let (sin_theta, cos_theta) = theta.sin_cos();

    let lon = ecef.y.atan2(ecef.x);
    let lat = (ecef.z + ep2 * b * sin_theta.powi(3)).atan2(p - e2 * a * cos_theta.powi(3));

    let sin_lat = lat.sin();
    let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    let alt = p / lat.cos() - n;

    Geodetic {
        lat: lat.to_degrees(),
        lon: lon.to_degrees(),
        alt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: DVec3, expected: DVec3, tolerance: f64) {
        assert!(
            (actual - expected).abs().max_element() < tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_ecef_from_lla_axes() {
        let a = WGS84.equatorial_radius;
        let b = WGS84.polar_radius();

        assert_close(ecef_from_lla(0.0, 0.0, 0.0), DVec3::new(a, 0.0, 0.0), 1e-9);
        assert_close(ecef_from_lla(0.0, 90.0, 0.0), DVec3::new(0.0, a, 0.0), 1e-6);
        assert_close(ecef_from_lla(0.0, 180.0, 0.0), DVec3::new(-a, 0.0, 0.0), 1e-6);
        assert_close(ecef_from_lla(90.0, 0.0, 0.0), DVec3::new(0.0, 0.0, b), 1e-6);
        assert_close(ecef_from_lla(-90.0, 0.0, 0.0), DVec3::new(0.0, 0.0, -b), 1e-6);
    }

    #[test]
    fn test_ecef_from_lla_altitude_along_normal() {
        let a = WGS84.equatorial_radius;
        let b = WGS84.polar_radius();

        assert_close(
            ecef_from_lla(0.0, 0.0, 100.0),
            DVec3::new(a + 100.0, 0.0, 0.0),
            1e-9,
        );
        assert_close(
            ecef_from_lla(90.0, 0.0, 100.0),
            DVec3::new(0.0, 0.0, b + 100.0),
            1e-6,
        );
    }

    #[test]
    fn test_ecef_from_lla_known_point() {
        let ecef = ecef_from_lla(55.754_066, 37.621_734, 153.0);
        assert_close(
            ecef,
            DVec3::new(2_849_505.602_361_612, 2_196_137.174_240_174, 5_249_208.110_959_371),
            1e-6,
        );
    }

    #[test]
    fn test_lla_from_ecef_equator() {
        let lla = lla_from_ecef(DVec3::new(WGS84.equatorial_radius + 50.0, 0.0, 0.0));
        assert!(lla.lat.abs() < 1e-12);
        assert!(lla.lon.abs() < 1e-12);
        assert!((lla.alt - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_lla_from_ecef_pole_latitude() {
        // Height is not meaningful exactly at the pole, but latitude is.
        let lla = lla_from_ecef(DVec3::new(0.0, 0.0, WGS84.polar_radius()));
        assert!((lla.lat - 90.0).abs() < 1e-9);

        let lla = lla_from_ecef(DVec3::new(0.0, 0.0, -WGS84.polar_radius()));
        assert!((lla.lat + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_lla_from_ecef_wraps_longitude() {
        let lla = lla_from_ecef(ecef_from_lla(10.0, 190.0, 0.0));
        assert!((lla.lon + 170.0).abs() < 1e-9);
        assert!((lla.lat - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_known_point() {
        let original = Geodetic::new(55.754_066, 37.621_734, 153.0);
        let back = Geodetic::from_ecef(original.to_ecef());
        assert!((back.lat - original.lat).abs() < 1e-8);
        assert!((back.lon - original.lon).abs() < 1e-8);
        assert!((back.alt - original.alt).abs() < 1e-8);
    }

    proptest! {
        #[test]
        fn prop_round_trip_near_surface(
            lat in -89.0f64..89.0,
            lon in -180.0f64..180.0,
            alt in -200.0f64..200.0,
        ) {
            let back = lla_from_ecef(ecef_from_lla(lat, lon, alt));
            prop_assert!((back.lat - lat).abs() < 1e-8, "lat {} vs {}", back.lat, lat);
            prop_assert!((back.lon - lon).abs() < 1e-8, "lon {} vs {}", back.lon, lon);
            prop_assert!((back.alt - alt).abs() < 1e-8, "alt {} vs {}", back.alt, alt);
        }
    }
}
