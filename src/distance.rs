//! Great-circle distances and open-path lengths.
//!
//! All distances are in kilometers on a sphere of mean Earth radius
//! [`EARTH_RADIUS_KM`]. Paths are open: no leg is added from the last
//! stop back to the first.

use crate::models::{GeoPoint, Waypoint};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Symmetric, and zero iff both coordinates are identical.
///
/// # Examples
///
/// ```
/// use u_routeseq::distance::haversine_km;
/// use u_routeseq::models::GeoPoint;
///
/// let madrid = GeoPoint::new(40.4168, -3.7038);
/// let paris = GeoPoint::new(48.8566, 2.3522);
/// let d = haversine_km(madrid, paris);
/// assert!((d - 1053.0).abs() < 5.0);
/// ```
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let h = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two stops, in kilometers.
#[inline]
pub fn distance<A: Waypoint + ?Sized, B: Waypoint + ?Sized>(a: &A, b: &B) -> f64 {
    haversine_km(a.location(), b.location())
}

/// Total length of an open path visiting `path` in order.
///
/// Returns 0 for paths with fewer than two stops.
pub fn path_cost<S: Waypoint>(path: &[S]) -> f64 {
    path.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Total length of the open path visiting `stops[order[0]], stops[order[1]], ...`.
///
/// # Panics
///
/// Panics if `order` contains an index out of bounds for `stops`.
pub fn order_cost<S: Waypoint>(stops: &[S], order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|w| distance(&stops[w[0]], &stops[w[1]]))
        .sum()
}
