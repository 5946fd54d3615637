//! Text statistics: counts, averages, and most frequent words.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;

use super::sentences::{split_sentences, words};

const TOP_WORDS: usize = 5;

/// Computed statistics for one input text.
#[derive(Debug, Clone, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    /// One-decimal average, or `"0"` when there are no sentences.
    pub avg_words_per_sentence: String,
    /// Up to five most frequent words with their counts. Ties keep
    /// first-occurrence order.
    pub top_words: Vec<(String, usize)>,
}

/// Compute statistics over `input`.
pub fn stats(input: &str) -> TextStats {
    let tokens = words(input);
    let word_count = tokens.len();
    let sentence_count = split_sentences(input).len();

    // Frequency table in first-occurrence order; the stable sort below keeps
    // that order for equal counts.
    let mut freq: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        match index.get(&token) {
            Some(&i) => freq[i].1 += 1,
            None => {
                index.insert(token.clone(), freq.len());
                freq.push((token, 1));
            }
        }
    }
    freq.sort_by_key(|&(_, count)| Reverse(count));
    freq.truncate(TOP_WORDS);

    let avg_words_per_sentence = if sentence_count > 0 {
        format!("{:.1}", word_count as f64 / sentence_count as f64)
    } else {
        "0".to_string()
    };

    TextStats {
        word_count,
        sentence_count,
        avg_words_per_sentence,
        top_words: freq,
    }
}

/// Fixed multi-line report over `stats`.
pub fn analyze(input: &str) -> String {
    let stats = stats(input);
    let common: Vec<String> = stats
        .top_words
        .iter()
        .map(|(word, count)| format!("{}({})", word, count))
        .collect();
    format!(
        "Word count: {}\nSentence count: {}\nAvg words/sentence: {}\nMost common words: {}",
        stats.word_count,
        stats.sentence_count,
        stats.avg_words_per_sentence,
        common.join(", ")
    )
}
