//! Delivery stops and their coordinates.

/// A geographic coordinate in decimal degrees.
///
/// Values are not range-checked. Out-of-range latitudes or longitudes
/// still produce a number through the distance formula.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, nominally −90..90.
    pub latitude: f64,
    /// Longitude in degrees, nominally −180..180.
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Anything the sequencer can place on a route.
///
/// The sequencer only reads the location. Every other field of the
/// implementing type travels through optimization untouched, so a caller's
/// own waypoint record can be passed in directly.
///
/// # Examples
///
/// ```
/// use u_routeseq::models::{GeoPoint, Waypoint};
///
/// struct Parcel {
///     tracking: String,
///     at: GeoPoint,
/// }
///
/// impl Waypoint for Parcel {
///     fn location(&self) -> GeoPoint {
///         self.at
///     }
/// }
/// ```
pub trait Waypoint {
    /// Coordinates of this stop.
    fn location(&self) -> GeoPoint;
}

impl Waypoint for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

impl<W: Waypoint + ?Sized> Waypoint for &W {
    fn location(&self) -> GeoPoint {
        (**self).location()
    }
}

/// A delivery stop with an identifier, a position in its route, and an
/// opaque payload.
///
/// # Examples
///
/// ```
/// use u_routeseq::models::Stop;
///
/// let depot = Stop::new("depot", 40.4168, -3.7038);
/// assert_eq!(depot.id(), "depot");
/// assert_eq!(depot.sequence(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop<P = ()> {
    id: String,
    location: GeoPoint,
    sequence: u32,
    payload: P,
}

impl Stop<()> {
    /// Creates a stop without payload at sequence position 1.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::with_payload(id, latitude, longitude, ())
    }
}

impl<P> Stop<P> {
    /// Creates a stop carrying `payload`.
    pub fn with_payload(id: impl Into<String>, latitude: f64, longitude: f64, payload: P) -> Self {
        Self {
            id: id.into(),
            location: GeoPoint::new(latitude, longitude),
            sequence: 1,
            payload,
        }
    }

    /// Sets the sequence position (builder style).
    pub fn at_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    /// 1-based position of this stop within its route.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn set_sequence(&mut self, sequence: u32) {
        self.sequence = sequence;
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> Waypoint for Stop<P> {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// Assigns sequence positions `1..=N` in slice order.
///
/// Call this on the output of the sequencer before persisting it.
pub fn renumber<P>(stops: &mut [Stop<P>]) {
    for (position, stop) in (1u32..).zip(stops.iter_mut()) {
        stop.set_sequence(position);
    }
}
