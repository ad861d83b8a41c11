//! Interest vectors exchanged between pipeline stages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-site interest scores keyed by site name.
///
/// Two instances flow through the pipeline: the *actual* vector
/// aggregated from observed traces, and the *predicted* vector produced
/// by the regressor for the full catalogue. After normalization the
/// minimum value is `0.0` and the maximum `1.0`, unless all raw values
/// were equal, in which case the raw totals pass through untouched.
///
/// An empty vector means "no data yet", never a failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestVector {
    scores: BTreeMap<String, f64>,
}

impl InterestVector {
    /// Construct a vector from pre-computed scores.
    #[must_use]
    pub const fn new(scores: BTreeMap<String, f64>) -> Self {
        Self { scores }
    }

    /// Return the score for a site, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    /// Return the number of scored sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether any scores are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(site name, score)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(name, &score)| (name.as_str(), score))
    }

    /// Consume the wrapper and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.scores
    }
}
