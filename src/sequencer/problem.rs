//! Route sequencing expressed as an annealing problem.

use rand::Rng;

use super::construction::nearest_neighbor;
use crate::distance::order_cost;
use crate::models::Waypoint;
use crate::sa::SaProblem;

/// Open-path ordering of a borrowed stop list.
///
/// Solutions are index permutations into `stops` with index 0 pinned at
/// the front. The starting point is the nearest-neighbor order; neighbors
/// swap two non-origin positions.
pub(crate) struct SwapSequencing<'a, S> {
    stops: &'a [S],
    construction: Vec<usize>,
}

impl<'a, S: Waypoint> SwapSequencing<'a, S> {
    pub(crate) fn new(stops: &'a [S]) -> Self {
        Self {
            stops,
            construction: nearest_neighbor(stops),
        }
    }

    pub(crate) fn construction(&self) -> &[usize] {
        &self.construction
    }
}

impl<S: Waypoint + Sync> SaProblem for SwapSequencing<'_, S> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        self.construction.clone()
    }

    fn cost(&self, order: &Vec<usize>) -> f64 {
        order_cost(self.stops, order)
    }

    /// Swaps two positions drawn independently from `1..len`.
    ///
    /// Both draws may land on the same position, giving an unchanged copy.
    fn neighbor<R: Rng>(&self, order: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut candidate = order.clone();
        let n = candidate.len();
        if n > 2 {
            let i = rng.random_range(1..n);
            let j = rng.random_range(1..n);
            candidate.swap(i, j);
        }
        candidate
    }
}
