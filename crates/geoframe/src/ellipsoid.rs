//! Reference ellipsoid parameters.

/// A reference ellipsoid, described by its equatorial radius and flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial (semi-major) radius in meters.
    pub equatorial_radius: f64,
    /// Flattening, `(a - b) / a`.
    pub flattening: f64,
}

/// The World Geodetic System 1984 ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid {
    equatorial_radius: 6_378_137.0,
    flattening: 1.0 / 298.257_223_563,
};

impl Ellipsoid {
    /// Polar (semi-minor) radius in meters, `a·(1 − f)`.
    #[must_use]
    pub const fn polar_radius(&self) -> f64 {
        self.equatorial_radius * (1.0 - self.flattening)
    }

    /// Square of the first eccentricity, `(a² − b²) / a²`.
    #[must_use]
    pub const fn first_eccentricity_squared(&self) -> f64 {
        let a = self.equatorial_radius;
        let b = self.polar_radius();
        (a * a - b * b) / (a * a)
    }

    /// Square of the second eccentricity, `(a² − b²) / b²`.
    #[must_use]
    pub const fn second_eccentricity_squared(&self) -> f64 {
        let a = self.equatorial_radius;
        let b = self.polar_radius();
        (a * a - b * b) / (b * b)
    }
}
