//! Visitor session traces as posted by the map front end.
//!
//! The collector appends one record per session to a flat JSON log. The
//! serde types here accept the exact payload the front end sends,
//! tolerate missing fields, and ignore anything extra so older or newer
//! collectors keep working.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A client-side sample timestamp.
///
/// The collector streams epoch-millisecond numbers point by point but
/// switches to ISO strings for the final flush on page unload, so both
/// forms must load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(f64),
    /// An ISO 8601 / RFC 3339 string.
    Text(String),
}

/// One sampled cursor/location reading inside a session.
///
/// A point missing either coordinate is invalid and is skipped during
/// aggregation rather than rejected at parse time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TracePoint {
    /// Latitude in decimal degrees, when reported.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, when reported.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Client-side sample timestamp, when reported.
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

impl TracePoint {
    /// Construct a valid point from a latitude/longitude pair.
    #[must_use]
    pub const fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            timestamp: None,
        }
    }

    /// The point's coordinates, or `None` when either axis is missing.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coord<f64>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coord { x: lon, y: lat }),
            _ => None,
        }
    }
}

/// One visitor session: an ordered movement trail plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionTrace {
    /// Collector-assigned session identifier.
    #[serde(default)]
    pub session_id: String,
    /// Session start, when reported; numeric or ISO like sample
    /// timestamps.
    #[serde(default)]
    pub start_time: Option<Timestamp>,
    /// Session end, when reported.
    #[serde(default)]
    pub end_time: Option<Timestamp>,
    /// Ordered movement samples.
    #[serde(default)]
    pub location_history: Vec<TracePoint>,
}

impl SessionTrace {
    /// Iterate over the coordinates of the session's valid points,
    /// skipping samples with a missing axis.
    pub fn valid_points(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        self.location_history
            .iter()
            .filter_map(TracePoint::coordinates)
    }
}
