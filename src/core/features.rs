use crate::core::metrics::{
    common_n_gram_count, edit_distance, edit_ratio, has_adjacent_transposition,
    phonetic_code_simplified, soundex_code,
};
use crate::core::normalize::{normalize_transliteration, tokenize};
use crate::models::{FeatureKey, FeatureVector};

/// Extract the comparison feature vector for a pair of names
///
/// Whole-name features (distance, n-grams, lengths) work on the lowercased
/// full strings. Phonetic, first-letter and transposition features work on
/// the first and last tokens.
///
/// # Arguments
/// * `name1` - First name, any case
/// * `name2` - Second name, any case
///
/// # Returns
/// A FeatureVector with every feature populated, including for empty input
pub fn extract_features(name1: &str, name2: &str) -> FeatureVector {
    let name1 = name1.to_lowercase();
    let name2 = name2.to_lowercase();

    let tokens1 = tokenize(&name1);
    let tokens2 = tokenize(&name2);

    let mut features = FeatureVector::default();

    // Whole-name edit distance
    features.set(FeatureKey::LevenshteinDist, edit_distance(&name1, &name2) as f64);
    features.set(FeatureKey::LevenshteinRatio, edit_ratio(&name1, &name2));

    // Token edit distance
    features.set(
        FeatureKey::FirstLevenshteinDist,
        edit_distance(&tokens1.first, &tokens2.first) as f64,
    );
    features.set(
        FeatureKey::FirstLevenshteinRatio,
        edit_ratio(&tokens1.first, &tokens2.first),
    );
    features.set(
        FeatureKey::LastLevenshteinDist,
        edit_distance(&tokens1.last, &tokens2.last) as f64,
    );
    features.set(
        FeatureKey::LastLevenshteinRatio,
        edit_ratio(&tokens1.last, &tokens2.last),
    );

    // Phonetic codes
    features.set(
        FeatureKey::SoundexMatchFirst,
        flag(soundex_code(&tokens1.first) == soundex_code(&tokens2.first)),
    );
    features.set(
        FeatureKey::SoundexMatchLast,
        flag(soundex_code(&tokens1.last) == soundex_code(&tokens2.last)),
    );

    // Metaphone and NYSIIS share the simplified code
    let phonetic_first = flag(
        phonetic_code_simplified(&tokens1.first) == phonetic_code_simplified(&tokens2.first),
    );
    let phonetic_last = flag(
        phonetic_code_simplified(&tokens1.last) == phonetic_code_simplified(&tokens2.last),
    );
    features.set(FeatureKey::MetaphoneMatchFirst, phonetic_first);
    features.set(FeatureKey::MetaphoneMatchLast, phonetic_last);
    features.set(FeatureKey::NysiisMatchFirst, phonetic_first);
    features.set(FeatureKey::NysiisMatchLast, phonetic_last);

    // Transliteration-normalized similarity
    features.set(
        FeatureKey::NormalizedLevenshteinRatio,
        edit_ratio(
            &normalize_transliteration(&name1),
            &normalize_transliteration(&name2),
        ),
    );

    // Shared character sequences
    features.set(
        FeatureKey::CommonBigrams,
        common_n_gram_count(&name1, &name2, 2) as f64,
    );
    features.set(
        FeatureKey::CommonTrigrams,
        common_n_gram_count(&name1, &name2, 3) as f64,
    );

    // Initials
    features.set(
        FeatureKey::FirstLetterMatch,
        flag(same_initial(&tokens1.first, &tokens2.first)),
    );
    features.set(
        FeatureKey::LastFirstLetterMatch,
        flag(same_initial(&tokens1.last, &tokens2.last)),
    );

    // Lengths of the full names
    let len1 = name1.chars().count();
    let len2 = name2.chars().count();
    features.set(FeatureKey::LenDiff, len1.abs_diff(len2) as f64);
    features.set(FeatureKey::LenRatio, length_ratio(len1, len2));

    // Typos that swap two neighbouring letters
    features.set(
        FeatureKey::HasFirstTransposition,
        has_adjacent_transposition(&tokens1.first, &tokens2.first) as f64,
    );
    features.set(
        FeatureKey::HasLastTransposition,
        has_adjacent_transposition(&tokens1.last, &tokens2.last) as f64,
    );

    features
}

#[inline]
fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Both tokens are non-empty and start with the same character
#[inline]
fn same_initial(a: &str, b: &str) -> bool {
    match (a.chars().next(), b.chars().next()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Shorter length over longer length, 1.0 when both are empty
#[inline]
fn length_ratio(len1: usize, len2: usize) -> f64 {
    let longer = len1.max(len2);
    if longer == 0 {
        return 1.0;
    }

    len1.min(len2) as f64 / longer as f64
}
