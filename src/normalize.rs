//! Input text normalization.
//!
//! A fixed-dictionary substitution of a handful of Hindi contract
//! terms into English so the downstream pattern tables can see them.
//! This is not translation; it is a stopgap for mixed-language
//! documents.

/// Hindi contract terms and their English substitutions.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("करार", "agreement"),
    ("अनुबंध", "contract"),
    ("पार्टी", "party"),
    ("कंपनी", "company"),
    ("कर्मचारी", "employee"),
];

/// Apply the fixed substitution dictionary to `text`.
pub fn normalize_text(text: &str) -> String {
    let mut normalized = text.to_string();
    for (term, replacement) in SUBSTITUTIONS {
        if normalized.contains(term) {
            normalized = normalized.replace(term, replacement);
        }
    }
    normalized
}
