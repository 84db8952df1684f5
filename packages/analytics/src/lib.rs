#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location analytics engine.
//!
//! Turns the upstream signals gathered for one location (satellite change
//! statistics, NDVI change, nearby competitors) into a bounded success
//! score, a seasonal demand curve and the KPI summary. Every computation is
//! a pure function of its inputs: the same [`AnalysisInputs`] always yield
//! the same outputs, and missing upstream data never causes an error.

pub mod briefing;
pub mod demand;
pub mod input;
pub mod kpi;
pub mod math;
pub mod score;

pub use briefing::build_briefing;
pub use demand::{generate_seasonal_demand, is_outdoor_business, location_offset};
pub use kpi::compute_kpis;
pub use score::{compute_success_score, score_breakdown};

use tapak_analytics_models::{AnalysisInputs, AnalysisReport};
use thiserror::Error;

/// Errors that can occur while loading analysis inputs.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Reading an inputs file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON inputs were malformed.
    #[error("Invalid JSON inputs: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML inputs were malformed.
    #[error("Invalid TOML inputs: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Runs the full analysis: score first, then the demand curve and KPIs
/// derived from that score.
#[must_use]
pub fn analyze(inputs: &AnalysisInputs) -> AnalysisReport {
    let success_score = compute_success_score(inputs);
    let seasonal_demand = generate_seasonal_demand(inputs, success_score.value());
    let kpis = compute_kpis(&inputs.businesses, success_score.value(), inputs.ndvi.as_ref());

    log::info!(
        "Analyzed {:?} with {} competitors: score {success_score}",
        inputs.business_type,
        inputs.competitor_count()
    );

    AnalysisReport {
        business_type: inputs.business_type.clone(),
        address: inputs.address.clone(),
        location: inputs.location,
        success_score,
        seasonal_demand,
        kpis,
    }
}
