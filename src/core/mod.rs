// Core algorithm exports
pub mod features;
pub mod matcher;
pub mod metrics;
pub mod normalize;
pub mod scoring;

pub use features::extract_features;
pub use matcher::{validate_threshold, MatchError, NameMatcher};
pub use metrics::{
    common_n_gram_count, edit_distance, edit_ratio, has_adjacent_transposition, n_grams,
    phonetic_code_simplified, soundex_code,
};
pub use normalize::{normalize_transliteration, tokenize};
pub use scoring::score;
