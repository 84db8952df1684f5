//! Plain-text analysis briefing for the chat assistant.
//!
//! The dashboard's assistant answers questions about one analysis at a time.
//! This module renders that analysis into the context block the assistant
//! is primed with, so its answers cite the same numbers the dashboard shows.

use tapak_analytics_models::{AnalysisInputs, ChangeDetectionResult, NdviChange, SuccessScore};

/// Maximum number of competitors listed in a briefing.
pub const MAX_LISTED_COMPETITORS: usize = 5;

fn location_label(inputs: &AnalysisInputs) -> String {
    match (&inputs.address, inputs.location) {
        (Some(address), _) if !address.trim().is_empty() => address.trim().to_string(),
        (_, Some(coords)) => format!("{:.4}, {:.4}", coords.lat, coords.lng),
        _ => "Unknown location".to_string(),
    }
}

fn satellite_lines(satellite: &ChangeDetectionResult) -> Vec<String> {
    let model = satellite
        .model_info
        .as_ref()
        .and_then(|info| info.model_used.as_deref())
        .unwrap_or("change_detection");

    satellite
        .change_percentage()
        .map(|change| format!("- Land Use Change: {change}% detected"))
        .into_iter()
        .chain(std::iter::once(format!("- Analysis Type: {model}")))
        .collect()
}

fn ndvi_lines(change: &NdviChange) -> Vec<String> {
    [
        change
            .total_change_percentage
            .map(|total| format!("- NDVI Total Change: {total}%")),
        change
            .vegetation_change_percentage
            .map(|vegetation| format!("- Vegetation Change: {vegetation}%")),
        change
            .urban_change_percentage
            .map(|urban| format!("- Urban Change: {urban}%")),
        change
            .change_intensity
            .as_ref()
            .map(|intensity| format!("- Change Intensity: {intensity}")),
        change
            .valid_pixels
            .map(|pixels| format!("- Valid Pixels Analyzed: {pixels}")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn imagery_section(inputs: &AnalysisInputs) -> String {
    let mut lines = Vec::new();
    if let Some(satellite) = &inputs.satellite {
        lines.extend(satellite_lines(satellite));
    }
    if let Some(change) = inputs.ndvi_change() {
        lines.extend(ndvi_lines(change));
    }

    if lines.is_empty() {
        "No satellite or NDVI data available".to_string()
    } else {
        lines.join("\n")
    }
}

fn competitor_section(inputs: &AnalysisInputs) -> String {
    if inputs.businesses.is_empty() {
        return "No competitor data available".to_string();
    }

    inputs
        .businesses
        .iter()
        .take(MAX_LISTED_COMPETITORS)
        .map(|b| format!("- {} ({}★, {}km away)", b.name, b.rating, b.distance_km))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the assistant context block for an analysis.
#[must_use]
pub fn build_briefing(inputs: &AnalysisInputs, success_score: SuccessScore) -> String {
    format!(
        "LOCATION ANALYSIS DATA:\n\
         - Location: {location}\n\
         - Business Type: {business_type}\n\
         - Success Score: {success_score}\n\
         - Competitors Found: {competitors}\n\
         \n\
         SATELLITE & NDVI ANALYSIS:\n\
         {imagery}\n\
         \n\
         TOP COMPETITORS:\n\
         {top_competitors}\n",
        location = location_label(inputs),
        business_type = inputs.business_type,
        competitors = inputs.competitor_count(),
        imagery = imagery_section(inputs),
        top_competitors = competitor_section(inputs),
    )
}

#[cfg(test)]
mod tests {
    use tapak_analytics_models::{ChangeStatistics, CompetitorRecord, Coordinates, NdviAnalysis};

    use super::*;

    fn score(value: u8) -> SuccessScore {
        SuccessScore::from_value(value).unwrap()
    }

    #[test]
    fn bare_inputs() {
        let inputs = AnalysisInputs {
            business_type: "Gym".to_string(),
            ..AnalysisInputs::default()
        };
        let briefing = build_briefing(&inputs, score(73));

        assert_eq!(
            briefing,
            "LOCATION ANALYSIS DATA:\n\
             - Location: Unknown location\n\
             - Business Type: Gym\n\
             - Success Score: 73%\n\
             - Competitors Found: 0\n\
             \n\
             SATELLITE & NDVI ANALYSIS:\n\
             No satellite or NDVI data available\n\
             \n\
             TOP COMPETITORS:\n\
             No competitor data available\n"
        );
    }

    #[test]
    fn full_inputs() {
        let businesses = (1..=7)
            .map(|i| CompetitorRecord {
                name: format!("Cafe {i}"),
                rating: 4.5,
                distance_km: 0.2,
                size_seats: 30,
            })
            .collect();

        let inputs = AnalysisInputs {
            business_type: "Cafe".to_string(),
            address: Some("  Bukit Bintang ".to_string()),
            location: Some(Coordinates {
                lat: 3.1466,
                lng: 101.7108,
            }),
            businesses,
            satellite: Some(ChangeDetectionResult {
                statistics: Some(ChangeStatistics {
                    change_percentage: Some(12.5),
                    ..ChangeStatistics::default()
                }),
                model_info: None,
            }),
            ndvi: Some(NdviAnalysis {
                change_analysis: Some(NdviChange {
                    vegetation_change_percentage: Some(24.1),
                    urban_change_percentage: Some(-20.4),
                    change_intensity: Some("moderate".to_string()),
                    ..NdviChange::default()
                }),
            }),
        };

        let briefing = build_briefing(&inputs, score(81));

        assert!(briefing.contains("- Location: Bukit Bintang\n"));
        assert!(briefing.contains("- Land Use Change: 12.5% detected\n"));
        assert!(briefing.contains("- Analysis Type: change_detection\n"));
        assert!(briefing.contains("- Vegetation Change: 24.1%\n"));
        assert!(briefing.contains("- Urban Change: -20.4%\n"));
        assert!(briefing.contains("- Change Intensity: moderate\n"));
        assert!(!briefing.contains("NDVI Total Change"));
        assert!(!briefing.contains("No satellite or NDVI data available"));
        assert!(briefing.contains("- Cafe 1 (4.5★, 0.2km away)\n"));
        assert!(briefing.contains("- Cafe 5 ("));
        assert!(!briefing.contains("- Cafe 6 ("));
    }

    #[test]
    fn empty_ndvi_block_reads_as_no_imagery() {
        let inputs = AnalysisInputs {
            ndvi: Some(NdviAnalysis {
                change_analysis: Some(NdviChange::default()),
            }),
            ..AnalysisInputs::default()
        };
        let briefing = build_briefing(&inputs, score(71));
        assert!(
            briefing.contains("SATELLITE & NDVI ANALYSIS:\nNo satellite or NDVI data available\n\n")
        );
    }

    #[test]
    fn coordinates_used_when_address_missing() {
        let inputs = AnalysisInputs {
            location: Some(Coordinates {
                lat: 3.139,
                lng: 101.6869,
            }),
            ..AnalysisInputs::default()
        };
        let briefing = build_briefing(&inputs, score(74));
        assert!(briefing.contains("- Location: 3.1390, 101.6869\n"));
    }
}
