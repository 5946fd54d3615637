//! Sentence-by-sentence renderings: explanations and numbered lists.

use super::sentences::split_sentences;

/// One numbered line per non-blank sentence, quoting it and restating it
/// with the leading capital lowered. Numbering is continuous over emitted
/// lines; blank segments are skipped without leaving gaps. Lines are joined
/// with blank lines. No sentences at all yields an empty string.
pub fn explain(input: &str) -> String {
    let mut lines = Vec::new();
    for sentence in split_sentences(input) {
        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            continue;
        }
        lines.push(format!(
            "{}. \"{}\" — This sentence means: {}.",
            lines.len() + 1,
            trimmed,
            lowercase_first(trimmed)
        ));
    }
    lines.join("\n\n")
}

/// Sentences as a numbered list, one per line. When the splitter finds no
/// sentences the input is returned unchanged.
pub fn numbered_list(input: &str) -> String {
    let points: Vec<&str> = split_sentences(input)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if points.is_empty() {
        return input.to_string();
    }
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
