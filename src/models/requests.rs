use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to compare two names
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(length(min = 1, message = "Both names are required"))]
    pub name1: String,
    #[validate(length(min = 1, message = "Both names are required"))]
    pub name2: String,
    /// Falls back to the configured default threshold
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Request to rank candidate names against a query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, message = "Query name is required"))]
    #[serde(alias = "queryName")]
    pub query_name: String,
    #[validate(length(min = 1, message = "Candidate names are required"))]
    #[serde(alias = "candidateNames")]
    pub candidate_names: Vec<String>,
    #[serde(default)]
    pub threshold: Option<f64>,
    /// Maximum number of ranked matches to return
    #[serde(default)]
    pub limit: Option<usize>,
}
