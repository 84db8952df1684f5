#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location analysis input and result types.
//!
//! Inputs are the already-gathered upstream payloads for one analysis
//! request: the competitor list from the places lookup, the satellite
//! change-detection result and the NDVI change analysis. Results are the
//! bounded success score, the 12-month seasonal demand curve and the KPI
//! summary shown on the dashboard.
//!
//! Upstream payloads keep the `snake_case` field names the imagery service
//! returns. Everything else serializes as `camelCase`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A resolved latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// A nearby business of the same type, as returned by the places lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    /// Business name.
    pub name: String,
    /// Average review rating (0-5). Missing ratings count as 0.
    #[serde(default)]
    pub rating: f64,
    /// Distance from the requested location in kilometres.
    #[serde(default, alias = "distance")]
    pub distance_km: f64,
    /// Seating capacity.
    #[serde(default, alias = "size")]
    pub size_seats: u32,
}

/// Pixel statistics from a satellite change-detection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeStatistics {
    /// Percentage of pixels that changed between the two dates (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
    /// Number of changed pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_pixels: Option<u64>,
    /// Number of pixels compared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pixels: Option<u64>,
}

/// Which model produced a change-detection result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
}

/// Satellite change-detection result.
///
/// Only `statistics` feeds the score. The payload counts as "present" for
/// the missing-data bonus even when `statistics` is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeDetectionResult {
    /// Change statistics, if the run produced any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ChangeStatistics>,
    /// Model metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_info: Option<ModelInfo>,
}

impl ChangeDetectionResult {
    /// Returns the change percentage, treating missing or `NaN` values as 0.
    #[must_use]
    pub fn change_percentage(&self) -> Option<f64> {
        self.statistics
            .as_ref()
            .map(|stats| or_zero(stats.change_percentage))
    }
}

/// NDVI change between two imagery dates. All percentages are signed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NdviChange {
    /// Change in urban (built-up) cover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_change_percentage: Option<f64>,
    /// Change in vegetation cover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetation_change_percentage: Option<f64>,
    /// Total land cover change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_change_percentage: Option<f64>,
    /// Qualitative intensity label (e.g. "moderate").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_intensity: Option<String>,
    /// Number of valid pixels in the comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_pixels: Option<u64>,
}

impl NdviChange {
    /// Urban change, 0 when missing.
    #[must_use]
    pub fn urban_change(&self) -> f64 {
        or_zero(self.urban_change_percentage)
    }

    /// Vegetation change, 0 when missing.
    #[must_use]
    pub fn vegetation_change(&self) -> f64 {
        or_zero(self.vegetation_change_percentage)
    }

    /// Total change, 0 when missing.
    #[must_use]
    pub fn total_change(&self) -> f64 {
        or_zero(self.total_change_percentage)
    }
}

/// NDVI analysis result wrapper, as returned by the imagery service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NdviAnalysis {
    /// The change analysis block, if the run produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_analysis: Option<NdviChange>,
}

fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Everything a single analysis is computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInputs {
    /// Free-text business type entered by the user (e.g. "Cafe").
    #[serde(default)]
    pub business_type: String,
    /// Free-text location entered by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Resolved coordinates, if geocoding succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    /// Competing businesses near the location.
    #[serde(default)]
    pub businesses: Vec<CompetitorRecord>,
    /// Satellite change-detection result.
    #[serde(
        default,
        alias = "satelliteData",
        skip_serializing_if = "Option::is_none"
    )]
    pub satellite: Option<ChangeDetectionResult>,
    /// NDVI change analysis.
    #[serde(default, alias = "ndviData", skip_serializing_if = "Option::is_none")]
    pub ndvi: Option<NdviAnalysis>,
}

impl AnalysisInputs {
    /// Number of competitors found.
    #[must_use]
    pub fn competitor_count(&self) -> usize {
        self.businesses.len()
    }

    /// The NDVI change block, if both the payload and its analysis exist.
    #[must_use]
    pub fn ndvi_change(&self) -> Option<&NdviChange> {
        self.ndvi.as_ref()?.change_analysis.as_ref()
    }

    /// The satellite statistics block, if both the payload and its
    /// statistics exist.
    #[must_use]
    pub fn satellite_statistics(&self) -> Option<&ChangeStatistics> {
        self.satellite.as_ref()?.statistics.as_ref()
    }

    /// Whether neither a satellite nor an NDVI payload was supplied.
    #[must_use]
    pub const fn lacks_imagery(&self) -> bool {
        self.satellite.is_none() && self.ndvi.is_none()
    }
}

/// Bounded location viability score, always within
/// [`SuccessScore::MIN`]..=[`SuccessScore::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SuccessScore(u8);

impl SuccessScore {
    /// Lowest score ever reported.
    pub const MIN: u8 = 70;
    /// Highest score ever reported.
    pub const MAX: u8 = 85;

    /// Clamps an arbitrary integer into the score band.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    /// Creates a score from a value already inside the band.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside 70-85.
    pub const fn from_value(value: u8) -> Result<Self, InvalidScoreError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(InvalidScoreError { value })
        }
    }

    /// Returns the numeric score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SuccessScore {
    type Error = InvalidScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<SuccessScore> for u8 {
    fn from(score: SuccessScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for SuccessScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Error returned when a [`SuccessScore`] is built from a value outside the
/// score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidScoreError {
    /// The rejected value.
    pub value: u8,
}

impl std::fmt::Display for InvalidScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid success score {}: expected {}-{}",
            self.value,
            SuccessScore::MIN,
            SuccessScore::MAX
        )
    }
}

impl std::error::Error for InvalidScoreError {}

/// How each signal contributed to a success score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Points from NDVI change (0-4).
    pub ndvi: f64,
    /// Points from satellite change detection (0-3.5).
    pub satellite: f64,
    /// Points from competitor density (0.5-11).
    pub competitor: f64,
    /// Flat bonus when no imagery was supplied (0 or 3).
    pub missing_data_bonus: f64,
    /// Baseline plus all contributions, before rounding.
    pub raw: f64,
    /// Density ceiling applied after rounding, if any.
    pub density_ceiling: Option<u8>,
    /// Final clamped score.
    pub score: SuccessScore,
}

/// Calendar month label for a demand point.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months, January first.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Zero-based position in the year.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One month of the seasonal demand curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandPoint {
    /// Month label.
    pub month: Month,
    /// Relative demand (70-100).
    pub demand: u8,
    /// Change against the previous month's base value. Always 0 for January.
    pub change: i32,
}

/// Summary metrics shown on the KPI cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    /// Mean competitor rating, one decimal place.
    pub avg_rating: f64,
    /// Estimated monthly customer demand.
    pub monthly_demand: u32,
    /// Rent sensitivity index (at least 50; lower is better).
    pub rent_sensitivity: u32,
    /// Number of competitors found.
    pub competitor_count: usize,
    /// Estimated revenue potential.
    pub revenue_potential: u32,
}

/// Complete analytics output for one location and business type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Business type the analysis was run for.
    pub business_type: String,
    /// Free-text location, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Resolved coordinates, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    /// Success score.
    pub success_score: SuccessScore,
    /// Seasonal demand curve, January first.
    pub seasonal_demand: [DemandPoint; 12],
    /// KPI summary.
    pub kpis: KpiSet,
}
