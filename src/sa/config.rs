//! SA configuration.

use crate::error::{Result, SequencerError};

/// Configuration for the Simulated Annealing engine.
///
/// The engine cools geometrically, `T_{k+1} = cooling_rate * T_k`, and
/// evaluates one candidate per temperature step.
///
/// # Examples
///
/// ```
/// use u_routeseq::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_min_temperature(0.1)
///     .with_cooling_rate(0.98);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The run stops once T is no longer above this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            min_temperature: 1.0,
            cooling_rate: 0.995,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
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
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return Err(SequencerError::invalid_config(
                "initial_temperature must be positive",
            ));
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(SequencerError::invalid_config(
                "min_temperature must be positive",
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(SequencerError::invalid_config(
                "min_temperature must be less than initial_temperature",
            ));
        }
        let alpha = self.cooling_rate;
        if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(SequencerError::invalid_config(format!(
                "cooling_rate must be in (0, 1), got {alpha}"
            )));
        }
        Ok(())
    }

    /// Number of temperature steps before `T` is no longer above
    /// `min_temperature`, cooling exactly as the runner does.
    ///
    /// Returns 0 for configurations that fail [`validate`](Self::validate).
    pub fn temperature_steps(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut temperature = self.initial_temperature;
        let mut steps = 0;
        while temperature > self.min_temperature {
            temperature *= self.cooling_rate;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 10_000.0).abs() < 1e-10);
        assert!((config.min_temperature - 1.0).abs() < 1e-15);
        assert!((config.cooling_rate - 0.995).abs() < 1e-15);
        assert_eq!(config.max_iterations, 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(matches!(
            config.validate(),
            Err(SequencerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_nan_temperature() {
        let config = SaConfig::default().with_min_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        assert!(SaConfig::default().with_cooling_rate(1.5).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(0.0).validate().is_err());
        assert!(SaConfig::default()
            .with_cooling_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_temperature_steps_default_schedule() {
        assert_eq!(SaConfig::default().temperature_steps(), 1838);
    }

    #[test]
    fn test_temperature_steps_exact_boundary() {
        // 8 -> 4 -> 2 -> 1: T reaches the floor exactly after three halvings,
        // where ln-based estimates can land either side of the boundary.
        let config = SaConfig::default()
            .with_initial_temperature(8.0)
            .with_min_temperature(1.0)
            .with_cooling_rate(0.5);
        assert_eq!(config.temperature_steps(), 3);
    }

    #[test]
    fn test_temperature_steps_invalid_config() {
        let config = SaConfig::default().with_cooling_rate(2.0);
        assert_eq!(config.temperature_steps(), 0);
    }
}
