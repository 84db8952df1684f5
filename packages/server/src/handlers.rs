//! HTTP handler functions for the analytics API.

use actix_web::{HttpRequest, HttpResponse, error::InternalError, web};
use tapak_analytics::{
    analyze, build_briefing, compute_kpis, compute_success_score, generate_seasonal_demand,
    score_breakdown,
};
use tapak_analytics_models::AnalysisInputs;
use tapak_server_models::{ApiBriefing, ApiError, ApiHealth, DemandQueryParams, KpiQueryParams};

/// Largest accepted request body.
const MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

/// Turns a payload or query error into a 400 with a JSON error body.
fn reject<E>(err: E, req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    log::warn!("Rejected {} {}: {err}", req.method(), req.path());
    let response = HttpResponse::BadRequest().json(ApiError {
        error: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(|err, req| reject(err, req))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| reject(err, req))
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/analysis`
///
/// Returns the full report: success score, demand curve and KPIs.
pub async fn analysis(inputs: web::Json<AnalysisInputs>) -> HttpResponse {
    HttpResponse::Ok().json(analyze(&inputs))
}

/// `POST /api/score`
///
/// Returns the success score with each signal's contribution.
pub async fn score(inputs: web::Json<AnalysisInputs>) -> HttpResponse {
    HttpResponse::Ok().json(score_breakdown(&inputs))
}

/// `POST /api/demand`
///
/// Returns the 12-month demand curve. `baseScore` overrides the computed
/// success score.
pub async fn demand(
    inputs: web::Json<AnalysisInputs>,
    params: web::Query<DemandQueryParams>,
) -> HttpResponse {
    let base_score = params
        .base_score
        .unwrap_or_else(|| compute_success_score(&inputs).value());

    HttpResponse::Ok().json(generate_seasonal_demand(&inputs, base_score))
}

/// `POST /api/kpis`
///
/// Returns the KPI cards. `successScore` overrides the computed success
/// score.
pub async fn kpis(
    inputs: web::Json<AnalysisInputs>,
    params: web::Query<KpiQueryParams>,
) -> HttpResponse {
    let success_score = params
        .success_score
        .unwrap_or_else(|| compute_success_score(&inputs).value());

    HttpResponse::Ok().json(compute_kpis(
        &inputs.businesses,
        success_score,
        inputs.ndvi.as_ref(),
    ))
}

/// `POST /api/briefing`
///
/// Returns the chat assistant context block for the analysis.
pub async fn briefing(inputs: web::Json<AnalysisInputs>) -> HttpResponse {
    let success_score = compute_success_score(&inputs);

    HttpResponse::Ok().json(ApiBriefing {
        briefing: build_briefing(&inputs, success_score),
    })
}
