//! Enclosed surface area of a ring of geographic points.
//!
//! The ring is implicitly closed: the last point connects back to the
//! first, and an explicit closing point (last == first) is ignored.
//! Results are unsigned; winding order carries no meaning for callers.

use std::f64::consts::FRAC_PI_2;

use geo::{Area, Coord, GeodesicArea, LineString, Polygon};

use crate::config::AreaMethod;
use crate::distance::EARTH_RADIUS_KM;
use crate::point::GeoPoint;

/// Surface area in square metres, by spherical excess on the mean-radius sphere.
///
/// Fewer than three points gives 0.
pub fn surface_area_m2(points: &[GeoPoint]) -> f64 {
    surface_area_m2_with(points, AreaMethod::Spherical, EARTH_RADIUS_KM)
}

/// Surface area in square metres using the chosen formula.
pub fn surface_area_m2_with(points: &[GeoPoint], method: AreaMethod, radius_km: f64) -> f64 {
    let ring = open_ring(points);
    if ring.len() < 3 {
        return 0.0;
    }
    let radius_m = radius_km * 1000.0;
    match method {
        AreaMethod::Spherical => spherical_signed_area(ring, radius_m).abs(),
        AreaMethod::Planar => planar_area(ring, radius_m),
        AreaMethod::Geodesic => geodesic_area(ring),
    }
}

/// Drop a trailing point that repeats the first one.
fn open_ring(points: &[GeoPoint]) -> &[GeoPoint] {
    match points {
        [first, rest @ .., last] if !rest.is_empty() && first == last => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}

/// Signed spherical-excess area. Positive = counter-clockwise.
///
/// Each edge contributes the signed area of the triangle it forms with
/// the north pole; the contributions of a closed ring sum to its area.
fn spherical_signed_area(ring: &[GeoPoint], radius_m: f64) -> f64 {
    let Some(&last) = ring.last() else {
        return 0.0;
    };
    let (lat, lng) = last.to_radians();
    let mut prev_tan_lat = ((FRAC_PI_2 - lat) / 2.0).tan();
    let mut prev_lng = lng;

    let mut total = 0.0;
    for p in ring {
        let (lat, lng) = p.to_radians();
        let tan_lat = ((FRAC_PI_2 - lat) / 2.0).tan();
        total += polar_triangle_area(tan_lat, lng, prev_tan_lat, prev_lng);
        prev_tan_lat = tan_lat;
        prev_lng = lng;
    }
    total * radius_m * radius_m
}

/// Signed area (unit sphere) of the triangle with vertices at the pole and
/// the two points, given as tangents of half their colatitudes.
fn polar_triangle_area(tan1: f64, lng1: f64, tan2: f64, lng2: f64) -> f64 {
    let d_lng = lng1 - lng2;
    let t = tan1 * tan2;
    2.0 * (t * d_lng.sin()).atan2(1.0 + t * d_lng.cos())
}

/// Shoelace area after an equirectangular projection to metres.
///
/// Longitudes are taken relative to the first point and wrapped into
/// [-180, 180] so rings crossing the antimeridian stay contiguous.
fn planar_area(ring: &[GeoPoint], radius_m: f64) -> f64 {
    let origin = ring[0];
    let mean_lat = ring.iter().map(|p| p.latitude).sum::<f64>() / ring.len() as f64;
    let x_scale = radius_m * mean_lat.to_radians().cos();

    let projected: Vec<Coord<f64>> = ring
        .iter()
        .map(|p| {
            let d_lon = wrap_degrees(p.longitude - origin.longitude);
            let d_lat = p.latitude - origin.latitude;
            Coord {
                x: d_lon.to_radians() * x_scale,
                y: d_lat.to_radians() * radius_m,
            }
        })
        .collect();

    Polygon::new(LineString::new(projected), vec![]).unsigned_area()
}

fn wrap_degrees(d: f64) -> f64 {
    let w = (d + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps +180 to -180; keep the sign of the input there.
    if w == -180.0 && d > 0.0 { 180.0 } else { w }
}

/// WGS84 ellipsoidal area.
///
/// No reorientation in lon/lat space: it misjudges winding for rings that
/// cross the antimeridian. The signed area's magnitude is the ring's area.
fn geodesic_area(ring: &[GeoPoint]) -> f64 {
    let exterior: LineString<f64> = ring.iter().map(|&p| Coord::from(p)).collect();
    Polygon::new(exterior, vec![]).geodesic_area_signed().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0.01° × 0.01° square with its south-west corner on the equator.
    fn small_square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.01),
            GeoPoint::new(0.01, 0.01),
            GeoPoint::new(0.01, 0.0),
        ]
    }

    /// Side length of `small_square` on the mean-radius sphere, squared.
    fn small_square_planar_m2() -> f64 {
        let side = (0.01f64).to_radians() * EARTH_RADIUS_KM * 1000.0;
        side * side
    }

    fn close_to(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(1.0)
    }

    #[test]
    fn fewer_than_three_points_have_no_area() {
        assert_eq!(surface_area_m2(&[]), 0.0);
        assert_eq!(surface_area_m2(&[GeoPoint::new(1.0, 1.0)]), 0.0);
        assert_eq!(
            surface_area_m2(&[GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)]),
            0.0
        );
        let pair = [GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)];
        for method in AreaMethod::ALL {
            assert_eq!(surface_area_m2_with(&pair, method, EARTH_RADIUS_KM), 0.0);
        }
    }

    #[test]
    fn small_square_matches_planar_value() {
        let expected = small_square_planar_m2();
        let spherical = surface_area_m2(&small_square());
        assert!(close_to(spherical, expected, 1e-3), "spherical {spherical} vs {expected}");

        let planar = surface_area_m2_with(&small_square(), AreaMethod::Planar, EARTH_RADIUS_KM);
        assert!(close_to(planar, expected, 1e-3), "planar {planar} vs {expected}");
    }

    #[test]
    fn geodesic_is_close_to_spherical_for_small_rings() {
        // The WGS84 ellipsoid differs from the mean sphere by well under 1%.
        let spherical = surface_area_m2(&small_square());
        let geodesic =
            surface_area_m2_with(&small_square(), AreaMethod::Geodesic, EARTH_RADIUS_KM);
        assert!(close_to(geodesic, spherical, 1e-2), "geodesic {geodesic} vs {spherical}");
    }

    #[test]
    fn octant_is_an_eighth_of_the_sphere() {
        let octant = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 90.0),
            GeoPoint::new(90.0, 0.0),
        ];
        let r = EARTH_RADIUS_KM * 1000.0;
        let expected = std::f64::consts::PI * r * r / 2.0;
        let got = surface_area_m2(&octant);
        assert!(close_to(got, expected, 1e-9), "octant {got} vs {expected}");
    }

    #[test]
    fn rotation_and_winding_do_not_change_area() {
        let base = small_square();
        for method in AreaMethod::ALL {
            // The ellipsoidal series loses a few digits more than the closed forms.
            let tol = if method == AreaMethod::Geodesic { 1e-6 } else { 1e-9 };
            let expected = surface_area_m2_with(&base, method, EARTH_RADIUS_KM);
            assert!(expected > 0.0);
            for shift in 1..base.len() {
                let mut rotated = base.clone();
                rotated.rotate_left(shift);
                let got = surface_area_m2_with(&rotated, method, EARTH_RADIUS_KM);
                assert!(close_to(got, expected, tol), "{method} rotated by {shift}");

                rotated.reverse();
                let got = surface_area_m2_with(&rotated, method, EARTH_RADIUS_KM);
                assert!(close_to(got, expected, tol), "{method} reversed, rotated by {shift}");
            }
        }
    }

    #[test]
    fn explicit_closing_point_is_ignored() {
        let open = small_square();
        let mut closed = open.clone();
        closed.push(open[0]);
        for method in AreaMethod::ALL {
            let a = surface_area_m2_with(&open, method, EARTH_RADIUS_KM);
            let b = surface_area_m2_with(&closed, method, EARTH_RADIUS_KM);
            assert!(close_to(a, b, 1e-12), "{method}: {a} vs {b}");
        }
    }

    #[test]
    fn collinear_points_have_no_area() {
        let line = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.5),
            GeoPoint::new(0.0, 1.0),
        ];
        assert!(surface_area_m2(&line) < 1.0);
    }

    #[test]
    fn rings_across_antimeridian_keep_their_size() {
        let west = [
            GeoPoint::new(0.0, 179.995),
            GeoPoint::new(0.0, -179.995),
            GeoPoint::new(0.01, -179.995),
            GeoPoint::new(0.01, 179.995),
        ];
        let expected = small_square_planar_m2();
        let planar = surface_area_m2_with(&west, AreaMethod::Planar, EARTH_RADIUS_KM);
        assert!(close_to(planar, expected, 1e-3), "planar {planar} vs {expected}");
        let spherical = surface_area_m2(&west);
        assert!(close_to(spherical, expected, 1e-3), "spherical {spherical} vs {expected}");

        // Ellipsoidal area, in both winding directions, must not flip to
        // the rest of the globe.
        let mut east = west;
        east.reverse();
        for ring in [&west, &east] {
            let geodesic = surface_area_m2_with(ring, AreaMethod::Geodesic, EARTH_RADIUS_KM);
            assert!(close_to(geodesic, spherical, 1e-2), "geodesic {geodesic} vs {spherical}");
        }
    }

    #[test]
    fn wrap_degrees_keeps_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert!((wrap_degrees(359.99) - -0.01).abs() < 1e-9);
        assert!((wrap_degrees(-359.99) - 0.01).abs() < 1e-9);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), -180.0);
    }
}
