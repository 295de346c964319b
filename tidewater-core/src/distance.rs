//! Geodesic distance between WGS84 coordinates.
//!
//! Distances are measured along the shortest path on the WGS84 ellipsoid
//! using Karney's algorithm (as implemented by `geo::Geodesic`), which stays
//! well-defined for antipodal and polar endpoints.

use std::cmp::Ordering;

use geo::{Coord, Distance, Geodesic, Point};

const METRES_PER_KILOMETRE: f64 = 1000.0;

/// Ellipsoidal geodesic distance between `a` and `b` in kilometres.
///
/// The result is exactly symmetric and exactly zero for identical inputs.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tidewater_core::distance_km;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 1.0, y: 0.0 };
///
/// let km = distance_km(a, b);
/// assert!((km - 111.319).abs() < 0.01);
/// assert_eq!(distance_km(a, b), distance_km(b, a));
/// assert_eq!(distance_km(a, a), 0.0);
/// ```
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    if a == b {
        return 0.0;
    }
    // Karney's inverse solution is not bitwise symmetric, so evaluate the
    // pair in a fixed order.
    let (origin, destination) = match compare_coords(a, b) {
        Ordering::Greater => (b, a),
        Ordering::Less | Ordering::Equal => (a, b),
    };
    let metres = Geodesic.distance(Point::from(origin), Point::from(destination));
    (metres / METRES_PER_KILOMETRE).max(0.0)
}

fn compare_coords(a: Coord<f64>, b: Coord<f64>) -> Ordering {
    a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
}
