//! Facade crate for the Heatwalk interest-inference engine.
//!
//! This crate re-exports the core domain types and the one-shot analysis
//! pipeline so embedding applications need a single dependency.

#![forbid(unsafe_code)]

pub use heatwalk_core::{
    BandError, EARTH_RADIUS_M, InterestVector, ProximityBand, ProximityBands, SessionTrace, Site,
    Timestamp, TracePoint, haversine_distance,
};

pub use heatwalk_scorer::{
    Analysis, DensityPoint, Features, MinMaxScaler, RbfSvr, SvrParams, actual_interest,
    density_points, load_sessions, predicted_interest, run_analysis,
};
