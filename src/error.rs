//! Error types for route sequencing.

use thiserror::Error;

/// Errors reported by the sequencer and the annealing engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencerError {
    /// The caller supplied a route with no stops.
    #[error("route has no stops to sequence")]
    EmptyRoute,

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The best order could not be mapped back onto the input stops.
    #[error("broken permutation: expected {expected} stops, found {found}")]
    BrokenPermutation {
        /// Number of stops in the input.
        expected: usize,
        /// Number of stops that could be placed.
        found: usize,
    },
}

/// Result type alias for sequencing operations.
pub type Result<T> = std::result::Result<T, SequencerError>;

impl SequencerError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
