//! Name Matcher - deterministic personal-name similarity engine
//!
//! This library extracts a fixed set of lexical and phonetic features from a
//! pair of names and combines them with a fixed weighting into a match
//! confidence. The same engine backs single-pair comparison and ranked
//! search over a candidate list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{extract_features, score, MatchError, NameMatcher};
pub use models::{FeatureImportance, FeatureKey, FeatureVector, MatchResult, RankedMatch};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = NameMatcher::default();
        let result = matcher.predict_match("Pooja", "Puja", 0.5);
        assert_eq!(result.features.len(), FeatureKey::COUNT);
    }
}
