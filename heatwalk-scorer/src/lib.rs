//! Interest inference for Heatwalk sites.
//!
//! The crate provides the two inference stages of the pipeline:
//! - **Session aggregation** loads the append-only session log, scores
//!   every valid trace point against every catalogue site through the
//!   proximity band table, and min-max normalizes the totals into the
//!   *actual* interest vector.
//! - **Interest regression** fits an RBF support-vector regressor on
//!   `(latitude, longitude, year) → actual interest` and predicts a
//!   re-normalized interest score for the full catalogue, including
//!   sites no visitor has been near yet.
//!
//! Every degraded path (missing or corrupt log, sites with unparseable
//! years, fewer than two training samples) returns an empty result and
//! logs a warning; callers render an empty overlay instead of failing.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use heatwalk_core::{ProximityBands, SessionTrace, Site, TracePoint};
//! use heatwalk_scorer::run_analysis;
//!
//! let catalog = vec![
//!     Site::new("First Normal School", Coord { x: 112.9670, y: 28.1792 }, "1914"),
//!     Site::new("Orange Isle", Coord { x: 112.9547, y: 28.1691 }, "1925"),
//! ];
//! let session = SessionTrace {
//!     location_history: vec![TracePoint::at(28.1792, 112.9670)],
//!     ..SessionTrace::default()
//! };
//! let analysis = run_analysis(&[session], &catalog, &ProximityBands::default());
//! assert_eq!(analysis.density.len(), 1);
//! ```

#![forbid(unsafe_code)]

mod aggregate;
mod normalise;
mod regress;
mod scale;
mod svr;

pub use aggregate::{DensityPoint, actual_interest, density_points, load_sessions};
pub use regress::predicted_interest;
pub use scale::{Features, MinMaxScaler};
pub use svr::{RbfSvr, SvrParams};

use heatwalk_core::{InterestVector, ProximityBands, SessionTrace, Site};

/// The two independent outputs of one analysis run.
///
/// The interest vector and the density point list use different
/// weighting semantics and must not be conflated: interest weights are
/// normalized per-site predictions, density weights are always `1.0`
/// per valid trace point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    /// Predicted, re-normalized interest per catalogue site.
    pub interest: InterestVector,
    /// Raw visitor-density points for the activity overlay.
    pub density: Vec<DensityPoint>,
}

/// Run the full one-shot pipeline against a session-log snapshot.
///
/// Stateless: every call aggregates, fits, and predicts from scratch.
/// When aggregation yields no data the regression stage is skipped and
/// the interest vector stays empty.
#[must_use]
pub fn run_analysis(
    sessions: &[SessionTrace],
    catalog: &[Site],
    bands: &ProximityBands,
) -> Analysis {
    let actual = actual_interest(sessions, catalog, bands);
    let interest = if actual.is_empty() {
        log::warn!("no actual interest scores; interest heatmap will be empty");
        InterestVector::default()
    } else {
        predicted_interest(&actual, catalog)
    };
    Analysis {
        interest,
        density: density_points(sessions),
    }
}

#[cfg(test)]
mod tests;
