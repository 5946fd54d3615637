//! Simplifying rewrite: shorter synonyms, long-clause splitting, length cap.

use std::sync::OnceLock;

use regex::Regex;

use super::{re, truncate_chars};

const MAX_CHARS: usize = 800;

/// Whole-word synonym substitutions, applied in order.
fn synonyms() -> &'static [(Regex, &'static str)] {
    static TABLE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            (r"(?i)\butilize\b", "use"),
            (r"(?i)\bdoes not\b", "doesn't"),
            (r"(?i)\bis not\b", "isn't"),
            (r"(?i)\bmoreover\b", "also"),
            (r"(?i)\bconsequently\b", "so"),
        ]
        .into_iter()
        .map(|(pat, rep)| (Regex::new(pat).expect("hardcoded pattern is valid"), rep))
        .collect()
    })
}

/// Substitute synonyms, split comma clauses of 80+ characters into their own
/// sentences, and cap the result at 800 characters.
pub fn rewrite(input: &str) -> String {
    let mut out = input.to_string();
    for (pattern, replacement) in synonyms() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    let out = re!(r",([^,]{80,})").replace_all(&out, ". $1");
    truncate_chars(&out, MAX_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_synonyms() {
        assert_eq!(
            rewrite("We utilize tools. Moreover, it does not work."),
            "We use tools. also, it doesn't work."
        );
    }

    #[test]
    fn splits_long_comma_clause() {
        let clause = "a".repeat(80);
        let input = format!("Start,{}", clause);
        assert_eq!(rewrite(&input), format!("Start. {}", clause));
    }

    #[test]
    fn keeps_short_comma_clause() {
        assert_eq!(rewrite("Start, short tail"), "Start, short tail");
    }

    #[test]
    fn caps_length_with_ellipsis() {
        let input = "b".repeat(900);
        let out = rewrite(&input);
        assert_eq!(out.chars().count(), 803);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn empty_input() {
        assert_eq!(rewrite(""), "");
    }
}
