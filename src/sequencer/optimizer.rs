//! Two-phase route sequencing: nearest-neighbor construction followed by
//! simulated-annealing refinement.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use super::config::SequencerConfig;
use super::problem::SwapSequencing;
use crate::distance::{order_cost, path_cost};
use crate::error::{Result, SequencerError};
use crate::models::Waypoint;
use crate::sa::{create_rng, SaRunner};

/// Outcome of sequencing one route.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceResult<S> {
    /// The input stops in their optimized order. `stops[0]` is the origin.
    pub stops: Vec<S>,

    /// Open-path length of `stops`, in kilometers.
    pub total_distance_km: f64,

    /// Open-path length of the stops in the order they were supplied.
    pub input_distance_km: f64,

    /// Length of the nearest-neighbor order the annealing started from.
    pub construction_distance_km: f64,

    /// Swap candidates evaluated.
    pub iterations: usize,

    /// Candidates accepted, improving or not.
    pub accepted_moves: usize,

    /// Candidates that were strictly shorter than the current order.
    pub improving_moves: usize,

    /// Whether the run stopped on its cancellation flag.
    pub cancelled: bool,
}

impl<S> SequenceResult<S> {
    /// Kilometers saved relative to the caller's original order.
    ///
    /// Negative when the supplied order was already shorter than anything
    /// the heuristic found.
    pub fn improvement_km(&self) -> f64 {
        self.input_distance_km - self.total_distance_km
    }

    fn unchanged(stops: Vec<S>, distance_km: f64) -> Self {
        Self {
            stops,
            total_distance_km: distance_km,
            input_distance_km: distance_km,
            construction_distance_km: distance_km,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            cancelled: false,
        }
    }
}

/// Computes short visiting orders for delivery routes.
///
/// The sequencer holds only configuration. Every call owns its own random
/// generator, so one `Sequencer` can serve many threads at once.
///
/// # Examples
///
/// ```
/// use u_routeseq::models::Stop;
/// use u_routeseq::sequencer::{Sequencer, SequencerConfig};
///
/// let sequencer = Sequencer::new(SequencerConfig::default().with_seed(42)).unwrap();
/// let stops = vec![
///     Stop::new("depot", 0.0, 0.0),
///     Stop::new("far", 0.0, 3.0),
///     Stop::new("near", 0.0, 1.0),
///     Stop::new("mid", 0.0, 2.0),
/// ];
///
/// let result = sequencer.optimize(stops).unwrap();
/// let ids: Vec<&str> = result.stops.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, ["depot", "near", "mid", "far"]);
/// assert!(result.improvement_km() > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    config: SequencerConfig,
}

impl Sequencer {
    /// Creates a sequencer, rejecting invalid schedules up front.
    pub fn new(config: SequencerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Reorders `stops` to shorten the open path from `stops[0]`.
    ///
    /// Routes of one or two stops come back unchanged. An empty route is an
    /// error.
    pub fn optimize<S: Waypoint + Sync>(&self, stops: Vec<S>) -> Result<SequenceResult<S>> {
        let mut rng = create_rng(self.config.seed);
        self.run(stops, &mut rng, None)
    }

    /// Like [`optimize`](Self::optimize), but stops early once `cancel` is
    /// set. The best order found so far is still returned.
    pub fn optimize_with_cancel<S: Waypoint + Sync>(
        &self,
        stops: Vec<S>,
        cancel: Arc<AtomicBool>,
    ) -> Result<SequenceResult<S>> {
        let mut rng = create_rng(self.config.seed);
        self.run(stops, &mut rng, Some(cancel))
    }

    /// Like [`optimize`](Self::optimize), drawing randomness from `rng`
    /// instead of the configured seed.
    pub fn optimize_with_rng<S: Waypoint + Sync, R: Rng>(
        &self,
        stops: Vec<S>,
        rng: &mut R,
    ) -> Result<SequenceResult<S>> {
        self.run(stops, rng, None)
    }

    /// Sequences independent routes, one result per route in input order.
    ///
    /// With a configured seed, route `k` uses `seed + k` so batches are
    /// reproducible. With the `parallel` feature, routes are processed on
    /// the rayon thread pool.
    pub fn optimize_batch<S: Waypoint + Send + Sync>(
        &self,
        routes: Vec<Vec<S>>,
    ) -> Vec<Result<SequenceResult<S>>> {
        let seed_for = |index: usize| self.config.seed.map(|s| s.wrapping_add(index as u64));

        #[cfg(feature = "parallel")]
        let results: Vec<Result<SequenceResult<S>>> = {
            use rayon::prelude::*;
            routes
                .into_par_iter()
                .enumerate()
                .map(|(index, stops)| self.run(stops, &mut create_rng(seed_for(index)), None))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<SequenceResult<S>>> = routes
            .into_iter()
            .enumerate()
            .map(|(index, stops)| self.run(stops, &mut create_rng(seed_for(index)), None))
            .collect();

        results
    }

    fn run<S: Waypoint + Sync, R: Rng>(
        &self,
        stops: Vec<S>,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SequenceResult<S>> {
        if stops.is_empty() {
            return Err(SequencerError::EmptyRoute);
        }

        let input_distance_km = path_cost(&stops);
        if stops.len() <= 2 {
            debug!(stops = stops.len(), "nothing to reorder");
            return Ok(SequenceResult::unchanged(stops, input_distance_km));
        }

        info!(
            event = "sequence_start",
            stops = stops.len(),
            input_distance_km,
        );

        let problem = SwapSequencing::new(&stops);
        let construction_distance_km = order_cost(&stops, problem.construction());
        debug!(construction_distance_km, "nearest-neighbor construction");

        let sa = SaRunner::run_with_rng(&problem, &self.config.to_sa_config(), rng, cancel)?;

        let ordered = apply_order(stops, &sa.best)?;

        info!(
            event = "sequence_end",
            total_distance_km = sa.best_cost,
            input_distance_km,
            iterations = sa.iterations,
            accepted = sa.accepted_moves,
            cancelled = sa.cancelled,
        );

        Ok(SequenceResult {
            stops: ordered,
            total_distance_km: sa.best_cost,
            input_distance_km,
            construction_distance_km,
            iterations: sa.iterations,
            accepted_moves: sa.accepted_moves,
            improving_moves: sa.improving_moves,
            cancelled: sa.cancelled,
        })
    }
}

/// Sequences `stops` with the default schedule and a fresh generator.
pub fn optimize<S: Waypoint + Sync>(stops: Vec<S>) -> Result<SequenceResult<S>> {
    Sequencer::default().optimize(stops)
}

/// Moves each stop into the position `order` assigns it.
fn apply_order<S>(stops: Vec<S>, order: &[usize]) -> Result<Vec<S>> {
    let expected = stops.len();
    let mut slots: Vec<Option<S>> = stops.into_iter().map(Some).collect();
    let ordered: Vec<S> = order
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect();

    if ordered.len() != expected {
        return Err(SequencerError::BrokenPermutation {
            expected,
            found: ordered.len(),
        });
    }
    Ok(ordered)
}
