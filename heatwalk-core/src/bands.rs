//! Banded proximity scoring: distance intervals with fixed score
//! contributions.
//!
//! The default table is a design constant, not derived from data. The
//! collecting front end assumes the same table:
//!
//! | Band | Interval (m) | Score |
//! |------|--------------|-------|
//! | 1    | `[0, 200]`   | 10    |
//! | 2    | `[201, 600]` | 5     |
//! | 3    | `[601, 1500]`| 3     |
//! | 4    | `[1501, ∞)`  | 1     |

use thiserror::Error;

/// Score returned when no band's inclusive interval contains a distance.
///
/// With the default table this is reachable only for fractional distances
/// inside a whole-metre boundary gap (for example 200.5 m); such
/// distances take the lowest contribution.
pub const FALLBACK_SCORE: f64 = 1.0;

/// One distance interval with its fixed interest-score contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityBand {
    /// Inclusive lower bound in metres. Whole-metre value.
    pub min: f64,
    /// Inclusive upper bound in metres; `f64::INFINITY` marks the open
    /// tail band.
    pub max: f64,
    /// Score contributed by a trace point whose distance falls inside
    /// the interval.
    pub score: f64,
}

impl ProximityBand {
    /// Construct a band without validation; tables are validated as a
    /// whole by [`ProximityBands::new`].
    #[must_use]
    pub const fn new(min: f64, max: f64, score: f64) -> Self {
        Self { min, max, score }
    }
}

/// Errors raised when a band table fails validation.
#[derive(Debug, Error, PartialEq)]
pub enum BandError {
    /// The table contained no bands.
    #[error("band table must contain at least one band")]
    Empty,
    /// The first band did not start at zero metres.
    #[error("first band must start at 0 m, found {found}")]
    WrongOrigin {
        /// Lower bound of the first band.
        found: f64,
    },
    /// A band's lower bound exceeded its upper bound.
    #[error("band [{min}, {max}] is not a valid interval")]
    InvalidInterval {
        /// Lower bound of the offending band.
        min: f64,
        /// Upper bound of the offending band.
        max: f64,
    },
    /// A finite boundary was not a whole number of metres.
    #[error("band boundary {value} must be a whole number of metres")]
    FractionalBoundary {
        /// The offending boundary value.
        value: f64,
    },
    /// Consecutive bands did not tile the metre line contiguously.
    #[error("band starting at {found_min} should start at {expected_min}")]
    Discontiguous {
        /// Lower bound required for contiguous coverage.
        expected_min: f64,
        /// Lower bound actually found.
        found_min: f64,
    },
    /// The final band had a finite upper bound, leaving `[max, ∞)`
    /// uncovered.
    #[error("last band must be unbounded, found upper bound {max}")]
    BoundedTail {
        /// Upper bound of the final band.
        max: f64,
    },
}

/// An ordered, validated proximity band table covering `[0, ∞)`.
///
/// Construction fails fast on a malformed table instead of silently
/// mis-scoring at lookup time.
///
/// # Examples
/// ```
/// use heatwalk_core::ProximityBands;
///
/// let bands = ProximityBands::default();
/// assert_eq!(bands.score(0.0), 10.0);
/// assert_eq!(bands.score(1_000_000.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityBands {
    bands: Vec<ProximityBand>,
}

impl ProximityBands {
    /// Validate and construct a band table.
    ///
    /// # Errors
    /// Returns a [`BandError`] when the table is empty, does not start at
    /// zero, has non-whole-metre boundaries, leaves a gap or overlap
    /// between consecutive bands, or ends with a bounded tail.
    #[expect(
        clippy::float_arithmetic,
        reason = "contiguity is checked on whole-metre boundaries"
    )]
    pub fn new(bands: Vec<ProximityBand>) -> Result<Self, BandError> {
        let Some(first) = bands.first() else {
            return Err(BandError::Empty);
        };
        if first.min != 0.0 {
            return Err(BandError::WrongOrigin { found: first.min });
        }

        let mut expected_min = 0.0_f64;
        for (index, band) in bands.iter().enumerate() {
            if band.min.fract() != 0.0 {
                return Err(BandError::FractionalBoundary { value: band.min });
            }
            if band.max.is_finite() && band.max.fract() != 0.0 {
                return Err(BandError::FractionalBoundary { value: band.max });
            }
            if band.min > band.max {
                return Err(BandError::InvalidInterval {
                    min: band.min,
                    max: band.max,
                });
            }
            if band.min != expected_min {
                return Err(BandError::Discontiguous {
                    expected_min,
                    found_min: band.min,
                });
            }
            let is_last = index + 1 == bands.len();
            if is_last {
                if band.max.is_finite() {
                    return Err(BandError::BoundedTail { max: band.max });
                }
            } else {
                expected_min = band.max + 1.0;
            }
        }

        Ok(Self { bands })
    }

    /// Return the score of the first band whose inclusive `[min, max]`
    /// interval contains `distance_m`, or [`FALLBACK_SCORE`] when none
    /// does.
    ///
    /// Bands are stored in ascending order, so the first match is also
    /// the closest band.
    #[must_use]
    pub fn score(&self, distance_m: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| distance_m >= band.min && distance_m <= band.max)
            .map_or(FALLBACK_SCORE, |band| band.score)
    }

    /// The validated bands in ascending distance order.
    #[must_use]
    pub fn bands(&self) -> &[ProximityBand] {
        &self.bands
    }
}

impl Default for ProximityBands {
    /// The fixed four-band table used by the interest pipeline.
    fn default() -> Self {
        // Known-valid constant table; bypasses revalidation.
        Self {
            bands: vec![
                ProximityBand::new(0.0, 200.0, 10.0),
                ProximityBand::new(201.0, 600.0, 5.0),
                ProximityBand::new(601.0, 1500.0, 3.0),
                ProximityBand::new(1501.0, f64::INFINITY, 1.0),
            ],
        }
    }
}
