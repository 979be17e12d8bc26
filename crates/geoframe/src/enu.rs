//! Conversions involving a local East-North-Up tangent frame.
//!
//! An ENU frame is anchored at a reference geodetic position. Its x axis
//! points east, y north and z up along the ellipsoid normal, all in meters.
//!
//! Each conversion builds the homogeneous ECEF-from-ENU transform for the
//! reference point fresh. Going from ECEF into the local frame inverts that
//! transform with [`geoframe_linalg::invert`].

use geoframe_linalg::{Matrix, invert};
use glam::{DMat4, DVec3, DVec4};

use crate::error::Result;
use crate::geodetic::{Geodetic, lla_from_ecef};

/// Build the 4×4 transform taking ENU coordinates at `reference` to ECEF.
///
/// The first three columns are the east, north and up unit vectors expressed
/// in ECEF; the last column is the reference position.
pub(crate) fn ecef_from_enu_transform(reference: Geodetic) -> DMat4 {
    let origin = reference.to_ecef();
    let (sin_lat, cos_lat) = reference.lat.to_radians().sin_cos();
    let (sin_lon, cos_lon) = reference.lon.to_radians().sin_cos();

    DMat4::from_cols(
        DVec4::new(-sin_lon, cos_lon, 0.0, 0.0),
        DVec4::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat, 0.0),
        DVec4::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat, 0.0),
        origin.extend(1.0),
    )
}

/// Convert a point in the ENU frame at `reference` to ECEF.
#[must_use]
pub fn ecef_from_enu(enu: DVec3, reference: Geodetic) -> DVec3 {
    ecef_from_enu_transform(reference).transform_point3(enu)
}

/// Convert an ECEF point into the ENU frame at `reference`.
///
/// # Errors
///
/// Returns [`crate::Error::Matrix`] if the frame transform cannot be
/// inverted, which only happens for a non-finite reference.
pub fn enu_from_ecef(ecef: DVec3, reference: Geodetic) -> Result<DVec3> {
    let transform = Matrix::from(ecef_from_enu_transform(reference));
    let inverse = DMat4::try_from(&invert(&transform)?)?;
    tracing::trace!(?reference, "inverted local frame transform");
    Ok(inverse.transform_point3(ecef))
}

/// Convert a geodetic position into the ENU frame at `reference`.
///
/// # Errors
///
/// See [`enu_from_ecef`].
pub fn enu_from_lla(point: Geodetic, reference: Geodetic) -> Result<DVec3> {
    enu_from_ecef(point.to_ecef(), reference)
}

/// Convert a point in the ENU frame at `reference` to a geodetic position.
#[must_use]
pub fn lla_from_enu(enu: DVec3, reference: Geodetic) -> Geodetic {
    lla_from_ecef(ecef_from_enu(enu, reference))
}
