//! Shared text segmentation: sentence splitting and word tokens.

use super::re;

/// Split text into sentence segments on `.`/`!`/`?`, each segment retaining
/// its trailing punctuation (and any leading whitespace from the source).
///
/// Returns an empty list when the text contains no delimiter at all; each
/// consumer defines its own fallback for that case.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if !text.contains(['.', '!', '?']) {
        return Vec::new();
    }
    re!(r"[^.!?]+[.!?]*")
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Lowercase word tokens: runs of letters with internal apostrophes.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    re!(r"\b[a-z']+\b")
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
