use serde::{Deserialize, Serialize};
use crate::models::domain::{FeatureImportance, RankedMatch};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<RankedMatch>,
}

/// Response for the feature importance endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FeatureImportanceResponse {
    pub feature_importance: FeatureImportance,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
