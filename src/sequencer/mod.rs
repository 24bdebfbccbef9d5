//! Route sequencing for a single vehicle.
//!
//! Orders delivery stops so the open path from a fixed origin is short:
//!
//! 1. [`nearest_neighbor`] builds a greedy, deterministic starting order.
//! 2. Simulated annealing refines it with random swaps of non-origin stops,
//!    always accepting shorter orders and accepting longer ones with
//!    probability `exp(-delta / T)` while the temperature cools
//!    geometrically.
//!
//! The result is always a permutation of the input with the origin kept at
//! index 0. It is a bounded-time heuristic, not an exact solver.

mod config;
mod construction;
mod optimizer;
mod problem;

pub use config::SequencerConfig;
pub use construction::nearest_neighbor;
pub use optimizer::{optimize, SequenceResult, Sequencer};
