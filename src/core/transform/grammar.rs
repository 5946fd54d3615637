//! Grammar correction and clarity cleanup.
//!
//! Both operations are fixed, ordered substitution pipelines. Order matters:
//! capitalization runs before punctuation spacing in `correct`, and after
//! space collapsing in `improve`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::re;

/// Whole-word fixes applied by `correct` before capitalization.
fn word_fixes() -> &'static [(Regex, &'static str)] {
    static FIXES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    FIXES.get_or_init(|| {
        [
            (r"(?i)\bi am\b", "I am"),
            (r"(?i)\bhe dont\b", "he doesn't"),
            (r"(?i)\bshe dont\b", "she doesn't"),
            (r"(?i)\bteh\b", "the"),
            (r"(?i)\bi've\b", "I've"),
            (r"(?i)\bi'll\b", "I'll"),
            (r"(?i)\bi'm\b", "I'm"),
        ]
        .into_iter()
        .map(|(pat, rep)| (Regex::new(pat).expect("hardcoded pattern is valid"), rep))
        .collect()
    })
}

/// Uppercase the first letter of the text and of each sentence start.
fn capitalize_sentences(text: &str) -> String {
    re!(r"(^\s*\w|[.!?]\s*\w)")
        .replace_all(text, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// No space before `.,!?;:`, exactly one space after.
fn tighten_punctuation(text: &str) -> String {
    let out = re!(r"\s+([.,!?;:])").replace_all(text, "$1");
    re!(r"([.,!?;:])(\S)")
        .replace_all(&out, "$1 $2")
        .into_owned()
}

/// Apply the whole-word fixes, then sentence capitalization, then
/// punctuation spacing.
pub fn correct(input: &str) -> String {
    let mut out = input.to_string();
    for (pattern, replacement) in word_fixes() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    tighten_punctuation(&capitalize_sentences(&out))
}

/// Normalize spacing and capitalization, and expand the two contractions
/// that commonly read ambiguously.
pub fn improve(input: &str) -> String {
    let out = tighten_punctuation(input);
    let out = re!(r"\s{2,}").replace_all(&out, " ");
    let out = capitalize_sentences(&out);
    let out = re!(r"(?i)\bhe's\b").replace_all(&out, "he is");
    re!(r"(?i)\bshe's\b")
        .replace_all(&out, "she is")
        .into_owned()
}
