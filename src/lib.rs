//! Delivery route sequencing.
//!
//! Given the stops of one route, with the first stop fixed as the starting
//! location, computes a visiting order that approximately minimizes the
//! total great-circle travel distance of the open path.
//!
//! - **Distance**: haversine distance and open-path length in kilometers.
//! - **Models**: [`GeoPoint`](models::GeoPoint), the
//!   [`Waypoint`](models::Waypoint) trait, and a ready-made
//!   [`Stop`](models::Stop) record.
//! - **Simulated Annealing (SA)**: a problem-agnostic annealing engine with
//!   pluggable cooling schedules.
//! - **Sequencer**: nearest-neighbor construction refined by SA swaps.
//!
//! # Architecture
//!
//! The crate is a pure computation. It performs no I/O, holds no global
//! state, and owns one random generator per call. Persisting the new order
//! and distance is left to the calling service.
//!
//! # Examples
//!
//! ```
//! use u_routeseq::models::{renumber, Stop};
//! use u_routeseq::sequencer::optimize;
//!
//! let stops = vec![
//!     Stop::new("depot", 40.4168, -3.7038),
//!     Stop::new("toledo", 39.8628, -4.0273),
//!     Stop::new("alcala", 40.4820, -3.3635),
//!     Stop::new("getafe", 40.3057, -3.7329),
//! ];
//!
//! let mut result = optimize(stops).unwrap();
//! renumber(&mut result.stops);
//! assert_eq!(result.stops[0].id(), "depot");
//! assert_eq!(result.stops[3].sequence(), 4);
//! ```

pub mod distance;
pub mod error;
pub mod models;
pub mod sa;
pub mod sequencer;

pub use error::{Result, SequencerError};
