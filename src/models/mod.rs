// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    FeatureError, FeatureImportance, FeatureKey, FeatureVector, MatchResult, NameTokens,
    RankedMatch, DEFAULT_FEATURE_IMPORTANCE,
};
pub use requests::{CompareRequest, SearchRequest};
pub use responses::{ErrorResponse, FeatureImportanceResponse, HealthResponse, SearchResponse};
