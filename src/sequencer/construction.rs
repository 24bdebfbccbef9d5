//! Nearest-neighbor construction.
//!
//! # Algorithm
//!
//! Starting from the origin (index 0), repeatedly extend the path to the
//! closest stop not yet placed. Each step is one linear scan over the
//! pending stops in input order.
//!
//! # Complexity
//!
//! O(n²) distance evaluations.

use crate::distance::distance;
use crate::models::Waypoint;

/// Builds a nearest-neighbor visiting order over `stops`.
///
/// Returns indices into `stops`, beginning with 0. Equidistant candidates
/// resolve to the one that comes first in input order: the scan only
/// replaces its incumbent on a strictly smaller distance.
///
/// # Examples
///
/// ```
/// use u_routeseq::models::GeoPoint;
/// use u_routeseq::sequencer::nearest_neighbor;
///
/// let stops = [
///     GeoPoint::new(0.0, 0.0),
///     GeoPoint::new(0.0, 3.0),
///     GeoPoint::new(0.0, 1.0),
///     GeoPoint::new(0.0, 2.0),
/// ];
/// assert_eq!(nearest_neighbor(&stops), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor<S: Waypoint>(stops: &[S]) -> Vec<usize> {
    let n = stops.len();
    let mut order = Vec::with_capacity(n);
    if n == 0 {
        return order;
    }

    order.push(0);
    let mut pending: Vec<usize> = (1..n).collect();
    let mut current = 0;

    while !pending.is_empty() {
        let mut closest_slot = 0;
        let mut min_dist = f64::INFINITY;

        for (slot, &candidate) in pending.iter().enumerate() {
            let d = distance(&stops[current], &stops[candidate]);
            if d < min_dist {
                min_dist = d;
                closest_slot = slot;
            }
        }

        current = pending.remove(closest_slot);
        order.push(current);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    #[test]
    fn test_nn_empty() {
        let stops: Vec<GeoPoint> = Vec::new();
        assert!(nearest_neighbor(&stops).is_empty());
    }

    #[test]
    fn test_nn_single() {
        assert_eq!(nearest_neighbor(&[GeoPoint::new(5.0, 5.0)]), vec![0]);
    }

    #[test]
    fn test_nn_origin_stays_first() {
        // The origin is far from everything else but still leads.
        let stops = [
            GeoPoint::new(50.0, 50.0),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.5),
        ];
        let order = nearest_neighbor(&stops);
        assert_eq!(order[0], 0);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_nn_tie_breaks_on_input_order() {
        // Both candidates are exactly one degree from the origin.
        let stops = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, -1.0),
            GeoPoint::new(0.0, 1.0),
        ];
        assert_eq!(nearest_neighbor(&stops), vec![0, 1, 2]);

        let swapped = [stops[0], stops[2], stops[1]];
        assert_eq!(nearest_neighbor(&swapped), vec![0, 1, 2]);
    }

    #[test]
    fn test_nn_deterministic() {
        let stops = [
            GeoPoint::new(40.0, -3.0),
            GeoPoint::new(41.2, -2.1),
            GeoPoint::new(39.5, -4.4),
            GeoPoint::new(40.3, -3.3),
            GeoPoint::new(42.0, -1.0),
        ];
        let first = nearest_neighbor(&stops);
        for _ in 0..5 {
            assert_eq!(nearest_neighbor(&stops), first);
        }
    }

    #[test]
    fn test_nn_is_permutation() {
        let stops: Vec<GeoPoint> = (0..25)
            .map(|i| GeoPoint::new((i * 7 % 13) as f64, (i * 5 % 11) as f64))
            .collect();
        let mut order = nearest_neighbor(&stops);
        assert_eq!(order[0], 0);
        order.sort_unstable();
        assert_eq!(order, (0..25).collect::<Vec<_>>());
    }
}
