//! Core domain types for the Heatwalk engine.
//!
//! The crate holds the pure pieces of the interest-inference pipeline:
//! the site catalogue entry, the visitor session trace, great-circle
//! distance, the banded proximity score table, and the interest vector
//! exchanged between pipeline stages. Everything here is side-effect
//! free; IO lives in the scorer and CLI crates.

#![forbid(unsafe_code)]

mod bands;
mod distance;
mod interest;
mod session;
mod site;

pub use bands::{BandError, FALLBACK_SCORE, ProximityBand, ProximityBands};
pub use distance::{EARTH_RADIUS_M, haversine_distance};
pub use interest::InterestVector;
pub use session::{SessionTrace, Timestamp, TracePoint};
pub use site::Site;
