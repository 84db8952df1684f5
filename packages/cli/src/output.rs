//! Terminal output helpers.

use serde::Serialize;
use tapak_analytics_models::AnalysisReport;

/// Serializes a value to JSON, optionally pretty-printed.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Prints a value to stdout as JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    println!("{}", to_json(value, pretty)?);
    Ok(())
}

/// Renders a report as a short human-readable summary.
pub fn summarize(report: &AnalysisReport) -> String {
    let mut lines = vec![
        format!("Business type:      {}", report.business_type),
        format!("Success score:      {}", report.success_score),
        format!("Competitors:        {}", report.kpis.competitor_count),
        format!("Average rating:     {:.1}", report.kpis.avg_rating),
        format!("Monthly demand:     {}", report.kpis.monthly_demand),
        format!("Rent sensitivity:   {}", report.kpis.rent_sensitivity),
        format!("Revenue potential:  {}", report.kpis.revenue_potential),
        String::new(),
        format!("{:<6} {:>6} {:>7}", "MONTH", "DEMAND", "CHANGE"),
    ];

    for point in &report.seasonal_demand {
        lines.push(format!(
            "{:<6} {:>6} {:>+7}",
            point.month.as_ref(),
            point.demand,
            point.change
        ));
    }

    lines.join("\n")
}
