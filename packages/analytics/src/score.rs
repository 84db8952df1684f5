//! Success score computation.
//!
//! The score starts at a baseline of 70 and accumulates points from NDVI
//! change, satellite change detection and competitor density. Competitor
//! density is read as proof of demand, not as a penalty. The rounded total
//! is capped for very dense areas and then clamped into the 70-85 band.

use tapak_analytics_models::{
    AnalysisInputs, ChangeStatistics, NdviChange, ScoreBreakdown, SuccessScore,
};

use crate::math::{magnitude, round_half_up};

/// Starting value before any contribution is added.
pub const BASELINE: f64 = 70.0;

const NDVI_CAP: f64 = 4.0;
const SATELLITE_CAP: f64 = 3.5;
const MISSING_DATA_BONUS: f64 = 3.0;

/// Points for NDVI change, capped at 4.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn ndvi_points(change: &NdviChange) -> f64 {
    let urban = magnitude(change.urban_change());
    let vegetation = magnitude(change.vegetation_change());
    let total = magnitude(change.total_change());

    (urban * 0.3 + vegetation * 0.2 + total * 0.1).min(NDVI_CAP)
}

/// Points for satellite change detection, capped at 3.5.
#[must_use]
pub fn satellite_points(statistics: &ChangeStatistics) -> f64 {
    let change = magnitude(statistics.change_percentage.unwrap_or(0.0));
    (change * 0.2).min(SATELLITE_CAP)
}

/// Points for the number of competitors nearby. Lower bounds are inclusive.
#[must_use]
pub const fn competitor_points(count: usize) -> f64 {
    match count {
        70.. => 11.0,
        50..=69 => 8.0,
        30..=49 => 5.0,
        15..=29 => 3.0,
        5..=14 => 1.0,
        _ => 0.5,
    }
}

/// Highest score allowed for a given competitor count, if any.
#[must_use]
pub const fn density_ceiling(count: usize) -> Option<u8> {
    match count {
        70.. => Some(81),
        50..=69 => Some(78),
        _ => None,
    }
}

/// Computes the success score along with each signal's contribution.
#[must_use]
pub fn score_breakdown(inputs: &AnalysisInputs) -> ScoreBreakdown {
    let competitor_count = inputs.competitor_count();

    let ndvi = inputs.ndvi_change().map_or(0.0, ndvi_points);
    let satellite = inputs.satellite_statistics().map_or(0.0, satellite_points);
    let competitor = competitor_points(competitor_count);
    let missing_data_bonus = if inputs.lacks_imagery() {
        MISSING_DATA_BONUS
    } else {
        0.0
    };

    let raw = BASELINE + ndvi + satellite + competitor + missing_data_bonus;

    log::debug!(
        "score_breakdown: competitors={competitor_count} ndvi={ndvi} satellite={satellite} \
         competitor={competitor} bonus={missing_data_bonus} raw={raw}"
    );

    #[allow(clippy::cast_possible_truncation)]
    let mut rounded = round_half_up(raw) as i64;

    let ceiling = density_ceiling(competitor_count);
    if let Some(ceiling) = ceiling {
        rounded = rounded.min(i64::from(ceiling));
    }

    let score = SuccessScore::clamped(rounded);
    log::debug!("score_breakdown: final score {score}");

    ScoreBreakdown {
        ndvi,
        satellite,
        competitor,
        missing_data_bonus,
        raw,
        density_ceiling: ceiling,
        score,
    }
}

/// Computes the bounded success score for a location. Never fails: absent
/// imagery contributes nothing.
#[must_use]
pub fn compute_success_score(inputs: &AnalysisInputs) -> SuccessScore {
    score_breakdown(inputs).score
}
