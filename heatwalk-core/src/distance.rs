//! Great-circle distance between geographic coordinates.
//!
//! Coordinates are WGS84 decimal degrees with `x = longitude` and
//! `y = latitude`, matching the convention used throughout the engine.

use geo::Coord;

/// Spherical Earth radius in metres used by [`haversine_distance`].
///
/// The collecting front end and the analysis backend both assume this
/// exact constant, so scores stay bit-compatible across the two.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Compute the haversine great-circle distance between two points, in
/// metres.
///
/// The function is pure and infallible; non-finite or out-of-range input
/// is a precondition violation and yields an unspecified result.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use heatwalk_core::haversine_distance;
///
/// let origin = Coord { x: 112.9670, y: 28.1792 };
/// assert_eq!(haversine_distance(origin, origin), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let phi1 = a.y.to_radians();
    let phi2 = b.y.to_radians();
    let delta_phi = (b.y - a.y).to_radians();
    let delta_lambda = (b.x - a.x).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}
