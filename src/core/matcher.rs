use crate::core::{features::extract_features, scoring::score};
use crate::models::{FeatureImportance, MatchResult, RankedMatch};
use rayon::prelude::*;
use thiserror::Error;

/// Candidate count at which searches switch to parallel evaluation
pub const DEFAULT_PARALLEL_MIN_CANDIDATES: usize = 256;

/// Errors surfaced to callers that opt into input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid threshold {0}: must be within [0, 1]")]
    InvalidThreshold(f64),
}

/// Reject thresholds outside [0, 1]
///
/// Matching itself never calls this; out-of-range thresholds are passed
/// through unless the caller validates them first.
pub fn validate_threshold(threshold: f64) -> Result<f64, MatchError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(MatchError::InvalidThreshold(threshold))
    }
}

/// Name matching orchestrator
///
/// # Pipeline
/// 1. Feature extraction for each name pair
/// 2. Weighted scoring against the feature importance table
/// 3. Threshold decision
/// 4. Ranking (searches only)
#[derive(Debug, Clone)]
pub struct NameMatcher {
    importance: FeatureImportance,
    parallel_min_candidates: usize,
}

impl NameMatcher {
    pub fn new(importance: FeatureImportance) -> Self {
        Self {
            importance,
            parallel_min_candidates: DEFAULT_PARALLEL_MIN_CANDIDATES,
        }
    }

    pub fn with_default_importance() -> Self {
        Self::new(FeatureImportance::default())
    }

    /// Set the candidate count at which searches run in parallel
    pub fn with_parallel_min_candidates(mut self, min_candidates: usize) -> Self {
        self.parallel_min_candidates = min_candidates;
        self
    }

    /// The feature weighting this matcher scores with
    pub fn importance(&self) -> &FeatureImportance {
        &self.importance
    }

    /// Compare two names
    ///
    /// # Arguments
    /// * `name1` - First name
    /// * `name2` - Second name
    /// * `threshold` - Minimum confidence for a match; not clamped, so a
    ///   value above 1 never matches and a value below 0 always matches
    ///
    /// # Returns
    /// MatchResult with the decision, confidence and full feature vector
    pub fn predict_match(&self, name1: &str, name2: &str, threshold: f64) -> MatchResult {
        let features = extract_features(name1, name2);
        let confidence = score(&features, &self.importance);

        MatchResult {
            is_match: confidence >= threshold,
            confidence,
            features,
        }
    }

    /// Find candidates matching a query name
    ///
    /// Candidates are scored independently (in parallel for large lists),
    /// filtered by threshold and then stable-sorted by confidence, so equal
    /// confidences keep their input order.
    pub fn find_matches<S>(&self, query: &str, candidates: &[S], threshold: f64) -> Vec<RankedMatch>
    where
        S: AsRef<str> + Sync,
    {
        let mut matches: Vec<RankedMatch> = if candidates.len() >= self.parallel_min_candidates {
            candidates
                .par_iter()
                .filter_map(|candidate| self.rank_candidate(query, candidate.as_ref(), threshold))
                .collect()
        } else {
            candidates
                .iter()
                .filter_map(|candidate| self.rank_candidate(query, candidate.as_ref(), threshold))
                .collect()
        };

        // Sort by confidence (descending); sort_by is stable
        matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Ranked {} of {} candidates for query {:?} at threshold {}",
            matches.len(),
            candidates.len(),
            query,
            threshold
        );

        matches
    }

    fn rank_candidate(&self, query: &str, candidate: &str, threshold: f64) -> Option<RankedMatch> {
        let result = self.predict_match(query, candidate, threshold);
        result.is_match.then(|| RankedMatch {
            name: candidate.to_string(),
            confidence: result.confidence,
        })
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::with_default_importance()
    }
}
