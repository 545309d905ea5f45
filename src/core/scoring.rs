use crate::models::{FeatureImportance, FeatureVector};

/// Calculate a match confidence (0-1) from a feature vector
///
/// Scoring formula:
/// score = clamp(
///     Σ features[key] * importance[key]   # over keys with a weight
/// , 0, 1)
///
/// Features without a weight contribute nothing, so adding a feature never
/// breaks an older weighting table.
pub fn score(features: &FeatureVector, importance: &FeatureImportance) -> f64 {
    let raw: f64 = importance
        .iter()
        .map(|(key, weight)| features.get(key) * weight)
        .sum();

    raw.min(1.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureKey;

    fn vector_with(values: &[(FeatureKey, f64)]) -> FeatureVector {
        let mut features = FeatureVector::default();
        for &(key, value) in values {
            features.set(key, value);
        }
        features
    }

    #[test]
    fn test_weighted_sum() {
        let features = vector_with(&[
            (FeatureKey::LevenshteinRatio, 0.5),
            (FeatureKey::FirstLetterMatch, 1.0),
        ]);
        let importance = FeatureImportance::new([
            (FeatureKey::LevenshteinRatio, 0.4),
            (FeatureKey::FirstLetterMatch, 0.2),
        ])
        .unwrap();

        let confidence = score(&features, &importance);
        assert!((confidence - 0.4).abs() < 1e-12, "Expected 0.4, got {}", confidence);
    }

    #[test]
    fn test_unweighted_features_ignored() {
        let features = vector_with(&[
            (FeatureKey::LenRatio, 1.0),
            (FeatureKey::CommonBigrams, 50.0),
        ]);
        let importance = FeatureImportance::new([(FeatureKey::LenRatio, 0.3)]).unwrap();

        assert!((score(&features, &importance) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_to_one() {
        let features = vector_with(&[(FeatureKey::CommonBigrams, 40.0)]);
        let importance = FeatureImportance::default();

        assert_eq!(score(&features, &importance), 1.0);
    }

    #[test]
    fn test_empty_importance_scores_zero() {
        let features = vector_with(&[(FeatureKey::LevenshteinRatio, 1.0)]);
        let importance = FeatureImportance::new(Vec::new()).unwrap();

        assert_eq!(score(&features, &importance), 0.0);
    }
}
