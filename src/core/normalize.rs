use crate::models::NameTokens;

/// Transliteration variants collapsed before comparison, applied in order
///
/// Each rule runs over the output of the previous one, so "shh" becomes
/// "sh" after the `sh` pass and stays that way.
const TRANSLITERATION_RULES: [(&str, &str); 8] = [
    ("aa", "a"),
    ("ee", "i"),
    ("oo", "u"),
    ("sh", "s"),
    ("ph", "f"),
    ("th", "t"),
    ("kh", "k"),
    ("v", "w"),
];

/// Split a name into its first and last tokens
///
/// The name is lowercased and split on whitespace. A single-token name has
/// no distinct last name, so `last` stays empty rather than repeating
/// `first`.
pub fn tokenize(name: &str) -> NameTokens {
    let lower = name.to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();

    let first = parts.first().copied().unwrap_or_default().to_string();
    let last = if parts.len() > 1 {
        parts[parts.len() - 1].to_string()
    } else {
        String::new()
    };

    NameTokens { first, last }
}

/// Collapse common romanisation variants of Hindi names
///
/// Input is expected to be lowercased already.
pub fn normalize_transliteration(name: &str) -> String {
    TRANSLITERATION_RULES
        .iter()
        .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to))
}
