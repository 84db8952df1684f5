//! KPI card metrics.

use tapak_analytics_models::{CompetitorRecord, KpiSet, NdviAnalysis, NdviChange};

use crate::math::{round_half_up, round_to_tenth};

/// Mean competitor rating, unrounded. 0 when there are no competitors.
/// `NaN` ratings count as 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(businesses: &[CompetitorRecord]) -> f64 {
    if businesses.is_empty() {
        return 0.0;
    }

    let total: f64 = businesses
        .iter()
        .map(|b| if b.rating.is_nan() { 0.0 } else { b.rating })
        .sum();

    total / businesses.len() as f64
}

/// Derives the KPI cards from the competitor list, the success score and
/// the NDVI analysis.
///
/// Revenue potential uses the unrounded average rating; only the reported
/// `avg_rating` is rounded to one decimal.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::suboptimal_flops
)]
pub fn compute_kpis(
    businesses: &[CompetitorRecord],
    success_score: u8,
    ndvi: Option<&NdviAnalysis>,
) -> KpiSet {
    let score = f64::from(success_score);
    let competitor_count = businesses.len();
    let avg_rating = average_rating(businesses);

    let urban = ndvi
        .and_then(|analysis| analysis.change_analysis.as_ref())
        .map_or(0.0, NdviChange::urban_change);

    let monthly_demand = round_half_up(10_000.0 + score * 150.0);
    let rent_sensitivity =
        round_half_up((90.0 - urban * 0.5 - competitor_count as f64 * 0.3).max(50.0));
    let revenue_potential = round_half_up(50_000.0 + score * 800.0 + avg_rating * 5_000.0);

    log::debug!(
        "compute_kpis: competitors={competitor_count} avg_rating={avg_rating} urban={urban} \
         rent_sensitivity={rent_sensitivity}"
    );

    KpiSet {
        avg_rating: round_to_tenth(avg_rating),
        monthly_demand: monthly_demand as u32,
        rent_sensitivity: rent_sensitivity as u32,
        competitor_count,
        revenue_potential: revenue_potential as u32,
    }
}
