use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{validate_threshold, MatchError, NameMatcher};
use crate::models::{
    CompareRequest, ErrorResponse, FeatureImportanceResponse, HealthResponse, SearchRequest,
    SearchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: NameMatcher,
    pub matching: MatchingSettings,
}

impl AppState {
    /// Threshold for a request, falling back to the configured default
    fn resolve_threshold(&self, requested: Option<f64>) -> Result<f64, MatchError> {
        let threshold = requested.unwrap_or(self.matching.default_threshold);
        if self.matching.validate_threshold {
            validate_threshold(threshold)
        } else {
            Ok(threshold)
        }
    }
}

/// Configure all name-matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compare", web::post().to(compare_names))
        .route("/search", web::post().to(search_names))
        .route("/feature-importance", web::get().to(feature_importance));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compare two names
///
/// POST /api/compare
///
/// Request body:
/// ```json
/// {
///   "name1": "string",
///   "name2": "string",
///   "threshold": 0.5
/// }
/// ```
async fn compare_names(
    state: web::Data<AppState>,
    req: web::Json<CompareRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for compare request: {}", errors);
        return bad_request("Both names are required", errors.to_string());
    }

    let threshold = match state.resolve_threshold(req.threshold) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!("Rejected compare request: {}", e);
            return bad_request("Invalid threshold", e.to_string());
        }
    };

    let result = state.matcher.predict_match(&req.name1, &req.name2, threshold);

    tracing::info!(
        "Compared names: is_match={}, confidence={:.3}, threshold={}",
        result.is_match,
        result.confidence,
        threshold
    );

    HttpResponse::Ok().json(result)
}

/// Rank candidate names against a query
///
/// POST /api/search
///
/// Request body:
/// ```json
/// {
///   "query_name": "string",
///   "candidate_names": ["string"],
///   "threshold": 0.5,
///   "limit": 10
/// }
/// ```
async fn search_names(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for search request: {}", errors);
        return bad_request(
            "Query name and candidate names are required",
            errors.to_string(),
        );
    }

    if req.candidate_names.len() > state.matching.max_candidates {
        return bad_request(
            "Too many candidate names",
            format!(
                "At most {} candidate names are allowed, got {}",
                state.matching.max_candidates,
                req.candidate_names.len()
            ),
        );
    }

    let threshold = match state.resolve_threshold(req.threshold) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!("Rejected search request: {}", e);
            return bad_request("Invalid threshold", e.to_string());
        }
    };

    let mut matches = state
        .matcher
        .find_matches(&req.query_name, &req.candidate_names, threshold);

    if let Some(limit) = req.limit {
        matches.truncate(limit);
    }

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        matches.len(),
        req.candidate_names.len()
    );

    HttpResponse::Ok().json(SearchResponse { matches })
}

/// Feature weights used for scoring
///
/// GET /api/feature-importance
async fn feature_importance(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FeatureImportanceResponse {
        feature_importance: state.matcher.importance().clone(),
    })
}
