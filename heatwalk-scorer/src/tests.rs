//! Unit coverage for normalization, scaling, and the SVR internals.
#![forbid(unsafe_code)]
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]

use std::collections::BTreeMap;

use rstest::rstest;

use crate::normalise::min_max_normalise;
use crate::scale::MinMaxScaler;
use crate::svr::{RbfSvr, SvrParams};

fn totals(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|&(name, value)| (name.to_owned(), value))
        .collect()
}

#[rstest]
fn normalisation_maps_extremes_to_zero_and_one() {
    let raw = totals(&[("a", 10.0), ("b", 1.0), ("c", 5.5)]);

    let normalised = min_max_normalise(&raw);

    assert_eq!(normalised.get("a"), Some(&1.0));
    assert_eq!(normalised.get("b"), Some(&0.0));
    let mid = normalised.get("c").copied().unwrap_or_default();
    assert!((mid - 0.5).abs() < 1e-12, "expected 0.5, got {mid}");
}

#[rstest]
fn degenerate_totals_pass_through_unscaled() {
    let raw = totals(&[("a", 4.0), ("b", 4.0), ("c", 4.0)]);

    let normalised = min_max_normalise(&raw);

    // No variance to scale: raw magnitudes stay visible.
    assert_eq!(normalised, raw);
}

#[rstest]
fn empty_totals_normalise_to_empty() {
    assert!(min_max_normalise(&BTreeMap::new()).is_empty());
}

#[rstest]
fn scaler_exposes_exact_fitted_bounds() {
    let rows = vec![
        [28.10, 112.90, 1900.0],
        [28.30, 113.10, 2000.0],
        [28.20, 113.00, 1950.0],
    ];

    let scaler = MinMaxScaler::fit(&rows).expect("fit scaler");

    assert_eq!(scaler.range(0), Some((28.10, 28.30)));
    assert_eq!(scaler.range(1), Some((112.90, 113.10)));
    assert_eq!(scaler.range(2), Some((1900.0, 2000.0)));
    assert_eq!(scaler.range(3), None);
}

#[rstest]
fn scaler_transform_is_exact_at_the_bounds_and_midpoint() {
    let rows = vec![[0.0, 10.0, 100.0], [2.0, 30.0, 300.0]];
    let scaler = MinMaxScaler::fit(&rows).expect("fit scaler");

    assert_eq!(scaler.transform([0.0, 10.0, 100.0]), [0.0, 0.0, 0.0]);
    assert_eq!(scaler.transform([2.0, 30.0, 300.0]), [1.0, 1.0, 1.0]);
    assert_eq!(scaler.transform([1.0, 20.0, 200.0]), [0.5, 0.5, 0.5]);
}

#[rstest]
fn scaler_maps_constant_features_to_zero() {
    let rows = vec![[5.0, 1.0, 7.0], [5.0, 2.0, 7.0]];
    let scaler = MinMaxScaler::fit(&rows).expect("fit scaler");

    assert_eq!(scaler.transform([5.0, 1.5, 7.0]), [0.0, 0.5, 0.0]);
}

#[rstest]
fn scaler_rejects_an_empty_matrix() {
    assert!(MinMaxScaler::fit(&[]).is_none());
}

#[rstest]
fn svr_requires_two_samples() {
    let result = RbfSvr::fit(&[[0.0, 0.0, 0.0]], &[1.0], SvrParams::default());
    assert!(result.is_none());
}

#[rstest]
fn svr_rejects_mismatched_lengths() {
    let samples = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
    let result = RbfSvr::fit(&samples, &[1.0], SvrParams::default());
    assert!(result.is_none());
}

#[rstest]
fn scale_gamma_matches_the_flattened_variance() {
    let samples = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
    let model = RbfSvr::fit(&samples, &[0.0, 1.0], SvrParams::default()).expect("fit svr");

    // Flattened variance is 0.25, so gamma = 1 / (3 * 0.25).
    assert!((model.gamma() - 4.0 / 3.0).abs() < 1e-12);
}

#[rstest]
fn svr_fits_two_points_to_within_the_tube() {
    let samples = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
    let params = SvrParams::default();
    let model = RbfSvr::fit(&samples, &[0.0, 1.0], params).expect("fit svr");

    let low = model.predict([0.0, 0.0, 0.0]);
    let high = model.predict([1.0, 1.0, 1.0]);
    assert!(low.abs() <= params.epsilon + 0.01, "low fit off: {low}");
    assert!(
        (high - 1.0).abs() <= params.epsilon + 0.01,
        "high fit off: {high}"
    );
    assert!(high > low, "ordering must be preserved");
}

#[rstest]
fn svr_predictions_are_finite_between_training_points() {
    let samples = [[0.0, 0.0, 0.0], [0.5, 0.5, 0.5], [1.0, 1.0, 1.0]];
    let model = RbfSvr::fit(&samples, &[0.0, 0.5, 1.0], SvrParams::default()).expect("fit svr");

    let mid = model.predict([0.75, 0.75, 0.75]);
    assert!(mid.is_finite());
    assert!(
        mid > model.predict([0.25, 0.25, 0.25]),
        "interest must grow towards the high-target end"
    );
}
