//! Sequencer configuration.

use crate::error::Result;
use crate::sa::SaConfig;

/// Annealing schedule and budget for route sequencing.
///
/// The defaults are the fixed schedule `T0 = 10000`, `alpha = 0.995`,
/// `T_min = 1`, which yields 1838 swap candidates per route regardless of
/// how many stops it has.
///
/// # Examples
///
/// ```
/// use u_routeseq::sequencer::SequencerConfig;
///
/// let config = SequencerConfig::default()
///     .with_max_iterations(500)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.to_sa_config().max_iterations, 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SequencerConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// Multiplicative cooling factor applied after every candidate.
    pub cooling_rate: f64,

    /// The search stops once the temperature is no longer above this.
    pub min_temperature: f64,

    /// Hard ceiling on swap candidates. 0 = bounded by the schedule only.
    pub max_iterations: usize,

    /// Seed for reproducible runs. `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.995,
            min_temperature: 1.0,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SequencerConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.to_sa_config().validate()
    }

    /// Engine configuration for this schedule.
    pub fn to_sa_config(&self) -> SaConfig {
        let config = SaConfig::default()
            .with_initial_temperature(self.initial_temperature)
            .with_min_temperature(self.min_temperature)
            .with_cooling_rate(self.cooling_rate)
            .with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Number of swap candidates a run evaluates unless cancelled.
    ///
    /// Counted by cooling step by step, so it matches the runner exactly.
    pub fn iteration_budget(&self) -> usize {
        let steps = self.to_sa_config().temperature_steps();
        if self.max_iterations > 0 {
            steps.min(self.max_iterations)
        } else {
            steps
        }
    }
}
