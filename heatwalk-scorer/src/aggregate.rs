//! Session-log loading and actual-interest aggregation.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use thiserror::Error;

use heatwalk_core::{InterestVector, ProximityBands, SessionTrace, Site, haversine_distance};
use heatwalk_fs::read_optional;

use crate::normalise::min_max_normalise;

/// A raw visitor-density heatmap point.
///
/// Every valid trace point becomes one density point with weight `1.0`;
/// density never reuses the interest weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Always `1.0` for density overlays.
    pub weight: f64,
}

#[derive(Debug, Error)]
enum SessionLogError {
    #[error("failed to read session log at {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse session log at {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the session-log snapshot at `path`.
///
/// The log is appended to by the collecting server, so every unhealthy
/// state (missing file, zero bytes, a torn or malformed write) degrades
/// to an empty log with a warning rather than an error. Callers treat an
/// empty log as "no data yet".
#[must_use]
pub fn load_sessions(path: &Utf8Path) -> Vec<SessionTrace> {
    match try_load_sessions(path) {
        Ok(sessions) => {
            log::debug!("loaded {} sessions from {path}", sessions.len());
            sessions
        }
        Err(err) => {
            log::warn!("treating session log as empty: {err}");
            Vec::new()
        }
    }
}

fn try_load_sessions(path: &Utf8Path) -> Result<Vec<SessionTrace>, SessionLogError> {
    let Some(contents) = read_optional(path).map_err(|source| SessionLogError::Read {
        path: path.to_path_buf(),
        source,
    })?
    else {
        return Ok(Vec::new());
    };
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&contents).map_err(|source| SessionLogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Aggregate observed traces into the normalized *actual* interest
/// vector.
///
/// Every valid trace point contributes its band score to **every**
/// site's running total, not just the nearest site: the model captures
/// ambient proximity interest rather than attributing a point to one
/// attraction. No distance cutoff applies beyond the band table's open
/// tail.
///
/// Returns an empty vector when no valid point exists.
#[expect(
    clippy::float_arithmetic,
    reason = "interest totals accumulate band scores"
)]
#[must_use]
pub fn actual_interest(
    sessions: &[SessionTrace],
    catalog: &[Site],
    bands: &ProximityBands,
) -> InterestVector {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut valid_points = 0_usize;

    for session in sessions {
        for point in session.valid_points() {
            valid_points += 1;
            for site in catalog {
                let distance = haversine_distance(point, site.location);
                *totals.entry(site.name.clone()).or_insert(0.0) += bands.score(distance);
            }
        }
    }

    if valid_points == 0 {
        return InterestVector::default();
    }
    log::debug!(
        "scored {valid_points} trace points against {} sites",
        catalog.len()
    );
    InterestVector::new(min_max_normalise(&totals))
}

/// Collect one weight-`1.0` density point per valid trace point.
#[must_use]
pub fn density_points(sessions: &[SessionTrace]) -> Vec<DensityPoint> {
    sessions
        .iter()
        .flat_map(SessionTrace::valid_points)
        .map(|coord| DensityPoint {
            latitude: coord.y,
            longitude: coord.x,
            weight: 1.0,
        })
        .collect()
}
