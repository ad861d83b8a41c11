//! Behavioural coverage for the interest regression stage.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use std::collections::BTreeMap;

use geo::Coord;
use heatwalk_core::{InterestVector, ProximityBands, SessionTrace, Site, TracePoint};
use heatwalk_scorer::{predicted_interest, run_analysis};
use rstest::rstest;

fn site(name: &str, lat: f64, lon: f64, year: &str) -> Site {
    Site::new(name, Coord { x: lon, y: lat }, year)
}

fn interest(pairs: &[(&str, f64)]) -> InterestVector {
    let scores: BTreeMap<String, f64> = pairs
        .iter()
        .map(|&(name, score)| (name.to_owned(), score))
        .collect();
    InterestVector::new(scores)
}

/// Three observed sites spaced evenly in every feature, plus one
/// unobserved site three quarters of the way along the same line.
fn graded_catalog() -> Vec<Site> {
    vec![
        site("Quiet Archive", 28.10, 112.90, "1900"),
        site("Garden Court", 28.20, 113.00, "1950"),
        site("Grand Pavilion", 28.30, 113.10, "2000"),
        site("Riverside Villa", 28.25, 113.05, "1975"),
    ]
}

#[rstest]
fn an_unobserved_site_interpolates_between_its_neighbours() {
    let actual = interest(&[
        ("Quiet Archive", 0.0),
        ("Garden Court", 0.5),
        ("Grand Pavilion", 1.0),
    ]);

    let predicted = predicted_interest(&actual, &graded_catalog());

    assert_eq!(predicted.len(), 4);
    let villa = predicted.get("Riverside Villa").expect("villa prediction");
    assert!(
        villa > 0.5 && villa < 1.0,
        "expected a score between its neighbours, got {villa}"
    );
}

#[rstest]
fn predictions_are_renormalised_to_the_unit_interval() {
    let actual = interest(&[
        ("Quiet Archive", 0.0),
        ("Garden Court", 0.5),
        ("Grand Pavilion", 1.0),
    ]);

    let predicted = predicted_interest(&actual, &graded_catalog());

    let scores: Vec<f64> = predicted.iter().map(|(_, score)| score).collect();
    assert!(scores.iter().all(|&score| (0.0..=1.0).contains(&score)));
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, 0.0);
    assert_eq!(max, 1.0);
}

#[rstest]
fn a_single_training_site_yields_an_empty_vector() {
    let actual = interest(&[("Quiet Archive", 1.0)]);
    let catalog = vec![
        site("Quiet Archive", 28.10, 112.90, "1900"),
        site("Garden Court", 28.20, 113.00, "1950"),
    ];

    assert!(predicted_interest(&actual, &catalog).is_empty());
}

#[rstest]
fn an_empty_catalogue_yields_an_empty_vector() {
    let actual = interest(&[("Quiet Archive", 1.0), ("Garden Court", 0.0)]);

    assert!(predicted_interest(&actual, &[]).is_empty());
}

#[rstest]
fn an_unparseable_year_excludes_a_site_from_both_stages() {
    let actual = interest(&[
        ("Quiet Archive", 0.0),
        ("Garden Court", 0.5),
        ("Lost Temple", 1.0),
    ]);
    let mut catalog = graded_catalog();
    catalog.push(site("Lost Temple", 28.15, 112.95, "unknown"));

    let predicted = predicted_interest(&actual, &catalog);

    // Trained on the two dated sites only; the undated one is absent
    // from the output as well.
    assert!(predicted.get("Lost Temple").is_none());
    assert_eq!(predicted.len(), 4);
}

#[rstest]
fn all_years_unparseable_yields_an_empty_vector() {
    let actual = interest(&[("Quiet Archive", 0.0), ("Garden Court", 1.0)]);
    let catalog = vec![
        site("Quiet Archive", 28.10, 112.90, "circa 1900"),
        site("Garden Court", 28.20, 113.00, "unknown"),
    ];

    assert!(predicted_interest(&actual, &catalog).is_empty());
}

#[rstest]
fn analysis_outputs_stay_independent() {
    let sessions = vec![SessionTrace {
        location_history: vec![
            TracePoint::at(28.10, 112.90),
            TracePoint::at(28.20, 113.00),
            TracePoint::at(28.30, 113.10),
        ],
        ..SessionTrace::default()
    }];

    let analysis = run_analysis(&sessions, &graded_catalog(), &ProximityBands::default());

    assert_eq!(analysis.density.len(), 3);
    assert!(analysis.density.iter().all(|point| point.weight == 1.0));
    assert_eq!(analysis.interest.len(), 4);
}

#[rstest]
fn an_empty_snapshot_produces_empty_outputs() {
    let analysis = run_analysis(&[], &graded_catalog(), &ProximityBands::default());

    assert!(analysis.interest.is_empty());
    assert!(analysis.density.is_empty());
}
