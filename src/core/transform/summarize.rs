//! Naive summarization: first two sentences, with a length-capped fallback.

use super::sentences::split_sentences;
use super::truncate_chars;

const FALLBACK_CHARS: usize = 150;

/// First two sentences, each trimmed, joined with a single space. When the
/// splitter yields nothing usable, falls back to the first 150 characters
/// of the raw input (with an ellipsis when truncated).
pub fn summarize(input: &str) -> String {
    let joined = split_sentences(input)
        .into_iter()
        .take(2)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    let out = joined.trim();
    if out.is_empty() {
        truncate_chars(input, FALLBACK_CHARS)
    } else {
        out.to_string()
    }
}
