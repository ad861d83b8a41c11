//! Regression stage: generalize actual interest across the catalogue.

use std::collections::BTreeMap;

use heatwalk_core::{InterestVector, Site};

use crate::normalise::min_max_normalise;
use crate::scale::{Features, MinMaxScaler};
use crate::svr::{RbfSvr, SvrParams};

/// Fit the interest regressor and predict a re-normalized score for
/// every catalogue site with a parseable year.
///
/// Training pairs come from sites present in both `actual` and
/// `catalog`; the feature order is `[latitude, longitude, year]`. A site
/// whose year does not parse is excluded from training and from the
/// prediction set, with a warning rather than an error.
///
/// All degraded paths return an empty vector: an empty catalogue, all
/// years unparseable, or fewer than two usable training pairs. The
/// scaler is fitted on the training matrix only and the identical
/// transform is applied to the prediction matrix.
#[must_use]
pub fn predicted_interest(actual: &InterestVector, catalog: &[Site]) -> InterestVector {
    let mut train_x: Vec<Features> = Vec::new();
    let mut train_y: Vec<f64> = Vec::new();
    for site in catalog {
        let Some(score) = actual.get(&site.name) else {
            continue;
        };
        let Some(features) = site_features(site, "training") else {
            continue;
        };
        train_x.push(features);
        train_y.push(score);
    }

    if train_x.len() < 2 {
        log::warn!(
            "insufficient training data: {} usable sites, need at least 2",
            train_x.len()
        );
        return InterestVector::default();
    }

    let Some(scaler) = MinMaxScaler::fit(&train_x) else {
        return InterestVector::default();
    };
    let scaled: Vec<Features> = train_x.iter().map(|&row| scaler.transform(row)).collect();
    let Some(model) = RbfSvr::fit(&scaled, &train_y, SvrParams::default()) else {
        return InterestVector::default();
    };
    log::debug!(
        "fitted SVR on {} sites (gamma {})",
        scaled.len(),
        model.gamma()
    );

    let mut predictions: BTreeMap<String, f64> = BTreeMap::new();
    for site in catalog {
        let Some(features) = site_features(site, "prediction") else {
            continue;
        };
        let prediction = model.predict(scaler.transform(features));
        predictions.insert(site.name.clone(), prediction);
    }
    if predictions.is_empty() {
        return InterestVector::default();
    }
    InterestVector::new(min_max_normalise(&predictions))
}

/// `[latitude, longitude, year]` for a site, or `None` (with a warning)
/// when the year does not parse.
fn site_features(site: &Site, stage: &str) -> Option<Features> {
    let Some(year) = site.numeric_year() else {
        log::warn!(
            "skipping site '{}' for {stage}: year '{}' is not numeric",
            site.name,
            site.year
        );
        return None;
    };
    Some([site.location.y, site.location.x, f64::from(year)])
}
