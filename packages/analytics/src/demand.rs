//! Seasonal demand curve generation.
//!
//! Every location shares the same wavy base pattern. A small offset derived
//! from the coordinates shifts it so neighbouring locations don't render
//! identical charts, and positive NDVI signals lift it. The offset comes
//! from a fixed trigonometric hash, so the same coordinates always produce
//! the same curve.

use tapak_analytics_models::{AnalysisInputs, Coordinates, DemandPoint, Month};

use crate::math::{fract_positive, round_half_up};

/// Generic seasonal shape, January first.
pub const BASE_PATTERN: [u8; 12] = [85, 78, 92, 88, 95, 76, 76, 89, 94, 91, 87, 98];

/// Business types that benefit from greener spring and summer months.
const OUTDOOR_KEYWORDS: &[&str] = &["restaurant", "cafe", "retail"];

/// Months (zero-based) that receive the vegetation boost: March to September.
const GROWING_SEASON: std::ops::RangeInclusive<usize> = 2..=8;

const MAX_LOCATION_OFFSET: f64 = 3.0;
const VEGETATION_BOOST_CAP: f64 = 10.0;
const URBAN_BOOST_CAP: f64 = 8.0;

/// Deterministic hash of a location in `[0, 1)`. Locations without
/// coordinates hash to the midpoint, 0.5.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn location_hash(location: Option<Coordinates>) -> f64 {
    let Some(Coordinates { lat, lng }) = location else {
        return 0.5;
    };

    let hash = fract_positive(((lat * 12.9898 + lng * 78.233).sin() * 43758.5453).abs());
    if hash.is_finite() { hash } else { 0.5 }
}

/// Offset in `[-3, 3]` added to every month of the base pattern.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn location_offset(location: Option<Coordinates>) -> f64 {
    location_hash(location) * (2.0 * MAX_LOCATION_OFFSET) - MAX_LOCATION_OFFSET
}

/// Whether the business type benefits from outdoor seasonality.
/// Matching is a case-insensitive substring check.
#[must_use]
pub fn is_outdoor_business(business_type: &str) -> bool {
    let business_type = business_type.to_lowercase();
    OUTDOOR_KEYWORDS
        .iter()
        .any(|keyword| business_type.contains(keyword))
}

/// Scale applied to every month. Scores at or above 70 leave the curve
/// untouched; lower scores shrink it, never below 85%.
#[must_use]
pub fn score_multiplier(base_score: u8) -> f64 {
    if base_score >= 70 {
        1.0
    } else {
        (f64::from(base_score) / 70.0).max(0.85)
    }
}

/// Base pattern shifted by the location offset, each month clamped to
/// 75-100.
#[must_use]
pub fn adjusted_pattern(location: Option<Coordinates>) -> [f64; 12] {
    let offset = location_offset(location);
    BASE_PATTERN.map(|base| round_half_up(f64::from(base) + offset).clamp(75.0, 100.0))
}

/// Generates the 12-month demand curve.
///
/// `base_score` is normally the success score for the same inputs, but any
/// value is accepted.
///
/// Each month's `change` compares against the previous month of the
/// unshifted [`BASE_PATTERN`], not against the previous adjusted value.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_seasonal_demand(inputs: &AnalysisInputs, base_score: u8) -> [DemandPoint; 12] {
    let adjusted = adjusted_pattern(inputs.location);
    let outdoor = is_outdoor_business(&inputs.business_type);
    let multiplier = score_multiplier(base_score);

    let (vegetation, urban) = inputs
        .ndvi_change()
        .map_or((0.0, 0.0), |change| {
            (change.vegetation_change(), change.urban_change())
        });

    let vegetation_boost = if outdoor && vegetation > 0.0 {
        (vegetation * 0.2).min(VEGETATION_BOOST_CAP)
    } else {
        0.0
    };
    let urban_boost = if urban > 0.0 {
        (urban * 0.15).min(URBAN_BOOST_CAP)
    } else {
        0.0
    };

    log::debug!(
        "generate_seasonal_demand: business={:?} outdoor={outdoor} offset={} \
         vegetation_boost={vegetation_boost} urban_boost={urban_boost} multiplier={multiplier}",
        inputs.business_type,
        location_offset(inputs.location),
    );

    Month::ALL.map(|month| {
        let i = month.index();
        let mut demand = adjusted[i];

        if GROWING_SEASON.contains(&i) {
            demand += vegetation_boost;
        }
        demand += urban_boost;
        demand *= multiplier;

        let change = if i == 0 {
            0
        } else {
            round_half_up(demand - f64::from(BASE_PATTERN[i - 1]) * multiplier) as i32
        };

        DemandPoint {
            month,
            demand: round_half_up(demand.clamp(70.0, 100.0)) as u8,
            change,
        }
    })
}

#[cfg(test)]
mod tests {
    use tapak_analytics_models::{NdviAnalysis, NdviChange};

    use super::*;

    const KUALA_LUMPUR: Coordinates = Coordinates {
        lat: 3.1390,
        lng: 101.6869,
    };

    fn ndvi(urban: f64, vegetation: f64) -> Option<NdviAnalysis> {
        Some(NdviAnalysis {
            change_analysis: Some(NdviChange {
                urban_change_percentage: Some(urban),
                vegetation_change_percentage: Some(vegetation),
                ..NdviChange::default()
            }),
        })
    }

    fn demands(points: &[DemandPoint; 12]) -> Vec<u8> {
        points.iter().map(|p| p.demand).collect()
    }

    fn changes(points: &[DemandPoint; 12]) -> Vec<i32> {
        points.iter().map(|p| p.change).collect()
    }

    #[test]
    fn kuala_lumpur_offset_is_stable() {
        let hash = location_hash(Some(KUALA_LUMPUR));
        let offset = location_offset(Some(KUALA_LUMPUR));
        assert!((hash - 0.587_465_515_163_785_3).abs() < 1e-6, "hash {hash}");
        assert!((offset - 0.524_793_090_982_711_9).abs() < 1e-6, "offset {offset}");
    }

    #[test]
    fn no_location_means_no_offset() {
        assert!((location_hash(None) - 0.5).abs() < f64::EPSILON);
        assert!(location_offset(None).abs() < f64::EPSILON);
        assert_eq!(adjusted_pattern(None), BASE_PATTERN.map(f64::from));
    }

    #[test]
    fn offset_stays_within_three_points() {
        for lat in [-89.9, -45.0, -1.5, 0.0, 3.139, 51.5074, 89.9] {
            for lng in [-179.9, -73.98, 0.0, 2.35, 101.6869, 179.9] {
                let offset = location_offset(Some(Coordinates { lat, lng }));
                assert!((-3.0..=3.0).contains(&offset), "offset {offset} at {lat},{lng}");
            }
        }
    }

    #[test]
    fn outdoor_detection() {
        assert!(is_outdoor_business("Restaurant"));
        assert!(is_outdoor_business("Specialty CAFE"));
        assert!(is_outdoor_business("retail store"));
        assert!(!is_outdoor_business("Gym"));
        assert!(!is_outdoor_business(""));
    }

    #[test]
    fn multiplier() {
        assert!((score_multiplier(70) - 1.0).abs() < f64::EPSILON);
        assert!((score_multiplier(85) - 1.0).abs() < f64::EPSILON);
        assert!((score_multiplier(63) - 0.9).abs() < 1e-12);
        assert!((score_multiplier(35) - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn plain_curve_without_location_or_ndvi() {
        let inputs = AnalysisInputs {
            business_type: "Gym".to_string(),
            ..AnalysisInputs::default()
        };
        let points = generate_seasonal_demand(&inputs, 74);

        assert_eq!(demands(&points), BASE_PATTERN.to_vec());
        assert_eq!(
            changes(&points),
            [0, -7, 14, -4, 7, -19, 0, 13, 5, -3, -4, 11]
        );
    }

    #[test]
    fn vegetation_boosts_growing_season_for_outdoor_business() {
        let inputs = AnalysisInputs {
            business_type: "Cafe".to_string(),
            ndvi: ndvi(0.0, 30.0),
            ..AnalysisInputs::default()
        };
        let points = generate_seasonal_demand(&inputs, 74);

        assert_eq!(
            demands(&points),
            [85, 78, 98, 94, 100, 82, 82, 95, 100, 91, 87, 98]
        );
        assert_eq!(
            changes(&points),
            [0, -7, 20, 2, 13, -13, 6, 19, 11, -3, -4, 11]
        );
    }

    #[test]
    fn vegetation_ignored_for_indoor_business() {
        let inputs = AnalysisInputs {
            business_type: "Gym".to_string(),
            ndvi: ndvi(0.0, 30.0),
            ..AnalysisInputs::default()
        };
        let points = generate_seasonal_demand(&inputs, 74);
        assert_eq!(demands(&points), BASE_PATTERN.to_vec());
    }

    #[test]
    fn kuala_lumpur_restaurant_curve() {
        let inputs = AnalysisInputs {
            business_type: "Restaurant".to_string(),
            location: Some(KUALA_LUMPUR),
            ndvi: ndvi(10.0, 20.0),
            ..AnalysisInputs::default()
        };
        let points = generate_seasonal_demand(&inputs, 81);

        assert_eq!(
            demands(&points),
            [88, 81, 99, 95, 100, 83, 83, 96, 100, 94, 90, 100]
        );
        assert_eq!(
            changes(&points),
            [0, -4, 21, 3, 14, -12, 7, 20, 12, 0, -1, 14]
        );
    }

    #[test]
    fn low_base_score_shrinks_curve() {
        let inputs = AnalysisInputs::default();
        let points = generate_seasonal_demand(&inputs, 35);

        assert_eq!(
            demands(&points),
            [72, 70, 78, 75, 81, 70, 70, 76, 80, 77, 74, 83]
        );
        assert_eq!(
            changes(&points),
            [0, -6, 12, -3, 6, -16, 0, 11, 4, -3, -3, 9]
        );
    }

    #[test]
    fn curve_shape_and_determinism() {
        let inputs = AnalysisInputs {
            business_type: "Retail".to_string(),
            location: Some(Coordinates {
                lat: -33.8688,
                lng: 151.2093,
            }),
            ndvi: ndvi(1e6, 1e6),
            ..AnalysisInputs::default()
        };

        let first = generate_seasonal_demand(&inputs, 85);
        let second = generate_seasonal_demand(&inputs, 85);
        assert_eq!(first, second);

        for (point, month) in first.iter().zip(Month::ALL) {
            assert_eq!(point.month, month);
            assert!((70..=100).contains(&point.demand));
        }
    }
}
