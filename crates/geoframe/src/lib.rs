//! WGS84 conversions between geodetic, ECEF and local ENU frames.
//!
//! This crate relates GPS-style latitude/longitude/altitude positions to
//! Earth-Centered, Earth-Fixed (ECEF) Cartesian coordinates and to a local
//! East-North-Up (ENU) tangent frame anchored at a reference position.
//!
//! # Conventions
//!
//! - Latitude and longitude are in degrees, north and east positive
//! - Altitude is height above the WGS84 ellipsoid, in meters
//! - ECEF and ENU points are [`glam::DVec3`] in meters; for ENU, x is east,
//!   y is north and z is up
//!
//! # Design principles
//!
//! - **Pure**: Every conversion is a function of its arguments and the fixed
//!   [`WGS84`] constants
//! - **Synchronous**: No async, no shared state; safe to call from any thread
//! - **Explicit failure**: Only conversions into the ENU frame can fail, when
//!   the frame transform cannot be inverted
//!
//! # Example
//!
//! ```
//! use geoframe::{Geodetic, enu_from_lla, lla_from_enu};
//!
//! let reference = Geodetic::new(55.753708, 37.620034, 154.0);
//! let point = Geodetic::new(55.754066, 37.621734, 153.0);
//!
//! let enu = enu_from_lla(point, reference)?;
//! assert!(enu.x > 100.0 && enu.y > 30.0);
//!
//! let back = lla_from_enu(enu, reference);
//! assert!((back.lat - point.lat).abs() < 1e-8);
//! # Ok::<(), geoframe::Error>(())
//! ```

mod ellipsoid;
mod enu;
mod error;
mod geodetic;

pub use ellipsoid::{Ellipsoid, WGS84};
pub use enu::{ecef_from_enu, enu_from_ecef, enu_from_lla, lla_from_enu};
pub use error::{Error, Result};
pub use geodetic::{Geodetic, ecef_from_lla, lla_from_ecef};

// Re-export the matrix types for convenience.
pub use geoframe_linalg::{Matrix, MatrixError, invert};
