//! Great-circle path length.

use crate::point::GeoPoint;

/// Mean Earth radius used for every spherical computation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points on a sphere of `radius_km`.
pub fn haversine_km(a: GeoPoint, b: GeoPoint, radius_km: f64) -> f64 {
    let (phi1, lambda1) = a.to_radians();
    let (phi2, lambda2) = b.to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = lambda2 - lambda1;

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let c = 2.0 * h.min(1.0).sqrt().asin();

    radius_km * c
}

/// Total length of the polyline through `points`, in kilometres.
///
/// Fewer than two points gives 0. Coordinates are not validated.
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    path_length_km_with_radius(points, EARTH_RADIUS_KM)
}

pub fn path_length_km_with_radius(points: &[GeoPoint], radius_km: f64) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_km(w[0], w[1], radius_km))
        .sum()
}
