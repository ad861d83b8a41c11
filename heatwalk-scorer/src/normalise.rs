//! Min-max normalization shared by both pipeline stages.

use std::collections::BTreeMap;

/// Rescale raw scores so the minimum maps to `0.0` and the maximum to
/// `1.0`.
///
/// When all values are equal there is no variance to scale, so the raw
/// values pass through untouched and the division is skipped entirely.
/// The pass-through is part of the pipeline contract: it changes the
/// score magnitudes presented to users.
#[expect(
    clippy::float_arithmetic,
    reason = "normalization rescales by the observed range"
)]
pub(crate) fn min_max_normalise(raw: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let Some(&first) = raw.values().next() else {
        return BTreeMap::new();
    };
    let (min, max) = raw
        .values()
        .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value)));
    if max <= min {
        return raw.clone();
    }
    let span = max - min;
    raw.iter()
        .map(|(name, &value)| (name.clone(), (value - min) / span))
        .collect()
}
