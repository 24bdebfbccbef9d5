//! Domain model types for route sequencing.
//!
//! - [`GeoPoint`] — latitude/longitude pair in degrees
//! - [`Waypoint`] — read access to a stop's location
//! - [`Stop`] — a concrete stop with id, sequence position and payload

mod stop;

pub use stop::{renumber, GeoPoint, Stop, Waypoint};
