#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the Tapak analytics server.
//!
//! Analysis payloads and results are the model types from
//! `tapak_analytics_models`; this crate only holds the envelope types
//! specific to the HTTP surface.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable reason.
    pub error: String,
}

/// Assistant briefing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBriefing {
    /// Plain-text context block for the chat assistant.
    pub briefing: String,
}

/// Query parameters for the demand curve endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandQueryParams {
    /// Score used to scale the curve. Defaults to the computed success
    /// score.
    pub base_score: Option<u8>,
}

/// Query parameters for the KPI endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiQueryParams {
    /// Score the KPIs are derived from. Defaults to the computed success
    /// score.
    pub success_score: Option<u8>,
}
