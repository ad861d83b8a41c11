//! Feature scaling for the regression stage.

/// Feature vector of latitude, longitude, and numeric year.
pub type Features = [f64; 3];

/// Per-feature linear rescaler into `[0.0, 1.0]`.
///
/// The scaler is an explicit, inspectable transform: [`MinMaxScaler::range`]
/// exposes the bounds fitted on the training matrix so tests can assert
/// exact scaled values. It is fitted once on training data and the
/// identical transform is applied to the prediction matrix; refitting on
/// prediction data would let the two feature spaces drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    ranges: [(f64, f64); 3],
}

impl MinMaxScaler {
    /// Fit per-feature minima and maxima on a training matrix.
    ///
    /// Returns `None` for an empty matrix, which callers treat as
    /// insufficient training data.
    #[must_use]
    pub fn fit(rows: &[Features]) -> Option<Self> {
        let first = rows.first()?;
        let mut ranges = first.map(|value| (value, value));
        for row in rows {
            for (range, value) in ranges.iter_mut().zip(row) {
                range.0 = range.0.min(*value);
                range.1 = range.1.max(*value);
            }
        }
        Some(Self { ranges })
    }

    /// The fitted `(min, max)` bounds for one feature column.
    #[must_use]
    pub fn range(&self, feature: usize) -> Option<(f64, f64)> {
        self.ranges.get(feature).copied()
    }

    /// Scale one feature vector with the fitted bounds.
    ///
    /// A feature that was constant across the training matrix maps to
    /// `0.0`, sidestepping a division by zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling rescales each feature by the fitted range"
    )]
    #[must_use]
    pub fn transform(&self, features: Features) -> Features {
        let mut scaled = [0.0; 3];
        for ((out, value), (min, max)) in scaled.iter_mut().zip(features).zip(self.ranges) {
            *out = if max > min { (value - min) / (max - min) } else { 0.0 };
        }
        scaled
    }
}
