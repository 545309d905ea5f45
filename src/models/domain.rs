use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building a feature-importance table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Invalid weight for {feature}: {weight} (weights must be finite and non-negative)")]
    InvalidWeight { feature: FeatureKey, weight: f64 },
}

/// Name of one entry in the comparison feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    LevenshteinDist,
    LevenshteinRatio,
    FirstLevenshteinDist,
    FirstLevenshteinRatio,
    LastLevenshteinDist,
    LastLevenshteinRatio,
    SoundexMatchFirst,
    SoundexMatchLast,
    MetaphoneMatchFirst,
    MetaphoneMatchLast,
    NysiisMatchFirst,
    NysiisMatchLast,
    NormalizedLevenshteinRatio,
    CommonBigrams,
    CommonTrigrams,
    FirstLetterMatch,
    LastFirstLetterMatch,
    LenDiff,
    LenRatio,
    HasFirstTransposition,
    HasLastTransposition,
}

impl FeatureKey {
    pub const COUNT: usize = 21;

    /// Every feature, in canonical order
    pub const ALL: [FeatureKey; FeatureKey::COUNT] = [
        FeatureKey::LevenshteinDist,
        FeatureKey::LevenshteinRatio,
        FeatureKey::FirstLevenshteinDist,
        FeatureKey::FirstLevenshteinRatio,
        FeatureKey::LastLevenshteinDist,
        FeatureKey::LastLevenshteinRatio,
        FeatureKey::SoundexMatchFirst,
        FeatureKey::SoundexMatchLast,
        FeatureKey::MetaphoneMatchFirst,
        FeatureKey::MetaphoneMatchLast,
        FeatureKey::NysiisMatchFirst,
        FeatureKey::NysiisMatchLast,
        FeatureKey::NormalizedLevenshteinRatio,
        FeatureKey::CommonBigrams,
        FeatureKey::CommonTrigrams,
        FeatureKey::FirstLetterMatch,
        FeatureKey::LastFirstLetterMatch,
        FeatureKey::LenDiff,
        FeatureKey::LenRatio,
        FeatureKey::HasFirstTransposition,
        FeatureKey::HasLastTransposition,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::LevenshteinDist => "levenshtein_dist",
            FeatureKey::LevenshteinRatio => "levenshtein_ratio",
            FeatureKey::FirstLevenshteinDist => "first_levenshtein_dist",
            FeatureKey::FirstLevenshteinRatio => "first_levenshtein_ratio",
            FeatureKey::LastLevenshteinDist => "last_levenshtein_dist",
            FeatureKey::LastLevenshteinRatio => "last_levenshtein_ratio",
            FeatureKey::SoundexMatchFirst => "soundex_match_first",
            FeatureKey::SoundexMatchLast => "soundex_match_last",
            FeatureKey::MetaphoneMatchFirst => "metaphone_match_first",
            FeatureKey::MetaphoneMatchLast => "metaphone_match_last",
            FeatureKey::NysiisMatchFirst => "nysiis_match_first",
            FeatureKey::NysiisMatchLast => "nysiis_match_last",
            FeatureKey::NormalizedLevenshteinRatio => "normalized_levenshtein_ratio",
            FeatureKey::CommonBigrams => "common_bigrams",
            FeatureKey::CommonTrigrams => "common_trigrams",
            FeatureKey::FirstLetterMatch => "first_letter_match",
            FeatureKey::LastFirstLetterMatch => "last_first_letter_match",
            FeatureKey::LenDiff => "len_diff",
            FeatureKey::LenRatio => "len_ratio",
            FeatureKey::HasFirstTransposition => "has_first_transposition",
            FeatureKey::HasLastTransposition => "has_last_transposition",
        }
    }

    /// Whether the feature holds a count (distance, n-gram count, length
    /// difference) rather than a ratio or 0/1 flag
    pub fn is_count(self) -> bool {
        matches!(
            self,
            FeatureKey::LevenshteinDist
                | FeatureKey::FirstLevenshteinDist
                | FeatureKey::LastLevenshteinDist
                | FeatureKey::CommonBigrams
                | FeatureKey::CommonTrigrams
                | FeatureKey::LenDiff
        )
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKey {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FeatureError::UnknownFeature(s.to_string()))
    }
}

/// Feature values for one name pair
///
/// Backed by a fixed array so every key always has a value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    values: [f64; FeatureKey::COUNT],
}

impl FeatureVector {
    #[inline]
    pub fn get(&self, key: FeatureKey) -> f64 {
        self.values[key as usize]
    }

    #[inline]
    pub fn set(&mut self, key: FeatureKey, value: f64) {
        self.values[key as usize] = value;
    }

    /// Iterate `(key, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, f64)> + '_ {
        FeatureKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<FeatureKey> for FeatureVector {
    type Output = f64;

    fn index(&self, key: FeatureKey) -> &f64 {
        &self.values[key as usize]
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FeatureKey::COUNT))?;
        for (key, value) in self.iter() {
            if key.is_count() {
                map.serialize_entry(key.as_str(), &(value as u64))?;
            } else {
                map.serialize_entry(key.as_str(), &value)?;
            }
        }
        map.end()
    }
}

/// Default weight of each feature when computing the match score
pub const DEFAULT_FEATURE_IMPORTANCE: [(FeatureKey, f64); FeatureKey::COUNT] = [
    (FeatureKey::LevenshteinRatio, 0.226),
    (FeatureKey::NormalizedLevenshteinRatio, 0.154),
    (FeatureKey::FirstLevenshteinRatio, 0.124),
    (FeatureKey::LastLevenshteinRatio, 0.102),
    (FeatureKey::SoundexMatchFirst, 0.085),
    (FeatureKey::CommonBigrams, 0.063),
    (FeatureKey::MetaphoneMatchFirst, 0.046),
    (FeatureKey::NysiisMatchFirst, 0.043),
    (FeatureKey::CommonTrigrams, 0.035),
    (FeatureKey::LenRatio, 0.031),
    (FeatureKey::FirstLetterMatch, 0.024),
    (FeatureKey::SoundexMatchLast, 0.022),
    (FeatureKey::LevenshteinDist, 0.016),
    (FeatureKey::MetaphoneMatchLast, 0.014),
    (FeatureKey::LenDiff, 0.011),
    (FeatureKey::FirstLevenshteinDist, 0.010),
    (FeatureKey::NysiisMatchLast, 0.009),
    (FeatureKey::HasFirstTransposition, 0.009),
    (FeatureKey::LastFirstLetterMatch, 0.008),
    (FeatureKey::HasLastTransposition, 0.007),
    (FeatureKey::LastLevenshteinDist, 0.006),
];

/// Immutable feature weighting used by the scorer
///
/// Keys may be missing; the scorer skips features without a weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureImportance {
    weights: BTreeMap<FeatureKey, f64>,
}

impl FeatureImportance {
    /// Build a table, rejecting negative or non-finite weights
    pub fn new<I>(weights: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = (FeatureKey, f64)>,
    {
        let mut table = BTreeMap::new();
        for (feature, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(FeatureError::InvalidWeight { feature, weight });
            }
            table.insert(feature, weight);
        }
        Ok(Self { weights: table })
    }

    /// Replace individual weights, keyed by feature name
    pub fn with_overrides<'a, I>(self, overrides: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut weights = self.weights;
        for (name, weight) in overrides {
            weights.insert(name.parse()?, weight);
        }
        Self::new(weights)
    }

    #[inline]
    pub fn get(&self, key: FeatureKey) -> Option<f64> {
        self.weights.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, f64)> + '_ {
        self.weights.iter().map(|(&key, &weight)| (key, weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for FeatureImportance {
    fn default() -> Self {
        Self {
            weights: DEFAULT_FEATURE_IMPORTANCE.into_iter().collect(),
        }
    }
}

/// First and last tokens of a lowercased name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTokens {
    pub first: String,
    /// Empty unless the name has at least two tokens
    pub last: String,
}

/// Outcome of comparing two names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub is_match: bool,
    pub confidence: f64,
    pub features: FeatureVector,
}

/// Candidate that passed the threshold during a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub name: String,
    pub confidence: f64,
}
