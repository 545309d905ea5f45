use std::collections::HashSet;

/// Length used by every Soundex code
const SOUNDEX_LEN: usize = 4;

/// Maximum length of a simplified phonetic code
const PHONETIC_CODE_LEN: usize = 4;

/// Calculate the Levenshtein edit distance between two strings
///
/// Insertions, deletions and substitutions each cost 1. Distances are
/// measured in Unicode scalar values, so "é" counts as one character.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Minimum number of single-character edits turning `a` into `b`
#[inline]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Calculate the edit similarity ratio (0-1)
///
/// `1 - distance / longer_length`. Two empty strings are identical and
/// score 1.0.
#[inline]
pub fn edit_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// Soundex digit for an uppercase ASCII letter
///
/// Returns `None` for H and W, which are dropped without touching
/// adjacency. Vowels, Y and anything outside A-Z map to 0.
#[inline]
fn soundex_digit(c: char) -> Option<u8> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some(1),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some(2),
        'D' | 'T' => Some(3),
        'L' => Some(4),
        'M' | 'N' => Some(5),
        'R' => Some(6),
        'H' | 'W' => None,
        _ => Some(0),
    }
}

/// Compute the 4-character American Soundex code of a string
///
/// The first character is kept verbatim (uppercased). Vowels, Y and
/// non-letters such as `-` or `'` separate repeated consonant codes; H and W
/// do not, so "Ashcraft" encodes as A261.
///
/// # Returns
/// `"0000"` for empty input, otherwise a code of exactly four characters
pub fn soundex_code(s: &str) -> String {
    let upper = s.to_uppercase();
    let mut chars = upper.chars();

    let first = match chars.next() {
        Some(c) => c,
        None => return "0".repeat(SOUNDEX_LEN),
    };

    let mut code = String::with_capacity(SOUNDEX_LEN);
    code.push(first);
    let mut len = 1;

    // The first letter's own digit seeds adjacency
    let mut prev_digit = soundex_digit(first).unwrap_or(0);

    for c in chars {
        if len >= SOUNDEX_LEN {
            break;
        }

        let digit = match soundex_digit(c) {
            Some(d) => d,
            None => continue,
        };

        if digit > 0 && digit != prev_digit {
            code.push(char::from(b'0' + digit));
            len += 1;
        }

        prev_digit = digit;
    }

    while len < SOUNDEX_LEN {
        code.push('0');
        len += 1;
    }

    code
}

/// Simplified phonetic code: lowercase, vowels removed, at most 4 characters
///
/// Stands in for both the metaphone and NYSIIS feature slots.
pub fn phonetic_code_simplified(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .take(PHONETIC_CODE_LEN)
        .collect()
}

/// All contiguous substrings of `n` characters, in order
///
/// Empty when the string is shorter than `n` or when `n` is zero.
pub fn n_grams(s: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = s.chars().collect();
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Number of distinct n-grams shared by both strings
pub fn common_n_gram_count(a: &str, b: &str, n: usize) -> usize {
    let grams_a: HashSet<String> = n_grams(a, n).into_iter().collect();
    let grams_b: HashSet<String> = n_grams(b, n).into_iter().collect();

    grams_a.intersection(&grams_b).count()
}

/// Check whether one adjacent swap inside `a` produces `b`
///
/// Only swaps within `a` are tried, so the check is not symmetric.
///
/// # Returns
/// 1 if a single adjacent transposition of `a` equals `b`, otherwise 0
pub fn has_adjacent_transposition(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > 1 {
        return 0;
    }

    let mut swapped = a.clone();
    for i in 0..a.len().saturating_sub(1) {
        swapped.swap(i, i + 1);
        if swapped == b {
            return 1;
        }
        swapped.swap(i, i + 1);
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("vikram", "bikram"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("josé", "jose"), 1);
        assert_eq!(edit_distance("राम", "राम"), 0);
    }

    #[test]
    fn test_edit_ratio() {
        assert_eq!(edit_ratio("", ""), 1.0);
        assert_eq!(edit_ratio("abc", "abc"), 1.0);
        assert_eq!(edit_ratio("abc", ""), 0.0);

        let ratio = edit_ratio("vikram", "bikram");
        assert!((ratio - 5.0 / 6.0).abs() < 1e-12, "Expected 5/6, got {}", ratio);
    }

    #[test]
    fn test_soundex_known_codes() {
        assert_eq!(soundex_code("Robert"), "R163");
        assert_eq!(soundex_code("Rupert"), "R163");
        assert_eq!(soundex_code("Ashcraft"), "A261");
        assert_eq!(soundex_code("Tymczak"), "T522");
        assert_eq!(soundex_code("Pfister"), "P236");
        assert_eq!(soundex_code("Honeyman"), "H555");
    }

    #[test]
    fn test_soundex_padding_and_empty() {
        assert_eq!(soundex_code(""), "0000");
        assert_eq!(soundex_code("a"), "A000");
        assert_eq!(soundex_code("lee"), "L000");
    }

    #[test]
    fn test_soundex_non_letters_separate_repeats() {
        assert_eq!(soundex_code("mc-carthy"), "M226");
        assert_eq!(soundex_code("mccarthy"), "M263");
        assert_eq!(soundex_code("o'neill"), "O540");
    }

    #[test]
    fn test_soundex_is_case_insensitive() {
        assert_eq!(soundex_code("gupta"), soundex_code("GUPTA"));
        assert_eq!(soundex_code("gupta"), "G130");
    }

    #[test]
    fn test_phonetic_code_simplified() {
        assert_eq!(phonetic_code_simplified(""), "");
        assert_eq!(phonetic_code_simplified("Suresh"), "srsh");
        assert_eq!(phonetic_code_simplified("aeiou"), "");
        assert_eq!(phonetic_code_simplified("krishnamurthy"), "krsh");
    }

    #[test]
    fn test_n_grams() {
        assert_eq!(n_grams("abcd", 2), vec!["ab", "bc", "cd"]);
        assert_eq!(n_grams("abcd", 4), vec!["abcd"]);
        assert!(n_grams("ab", 3).is_empty());
        assert!(n_grams("abc", 0).is_empty());
    }

    #[test]
    fn test_common_n_gram_count_uses_distinct_grams() {
        // "aaaa" has a single distinct bigram "aa"
        assert_eq!(common_n_gram_count("aaaa", "aa", 2), 1);
        assert_eq!(common_n_gram_count("ravi", "ravi", 2), 3);
        assert_eq!(common_n_gram_count("abc", "xyz", 2), 0);
    }

    #[test]
    fn test_has_adjacent_transposition() {
        assert_eq!(has_adjacent_transposition("ab", "ba"), 1);
        assert_eq!(has_adjacent_transposition("amit", "mait"), 1);
        assert_eq!(has_adjacent_transposition("abc", "bca"), 0);
        assert_eq!(has_adjacent_transposition("abc", "abc"), 0);
        assert_eq!(has_adjacent_transposition("", ""), 0);
        assert_eq!(has_adjacent_transposition("a", "abcd"), 0);
    }
}
