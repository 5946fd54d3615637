//! Pure text transformations, one module per task family.
//!
//! Every operation is total over arbitrary input, including the empty
//! string; the controller handles blank input before dispatching here.

mod analyze;
mod grammar;
mod outline;
mod rewrite;
mod sentences;
mod summarize;

pub use analyze::{TextStats, analyze, stats};
pub use grammar::{correct, improve};
pub use outline::{explain, numbered_list};
pub use rewrite::rewrite;
pub use sentences::{split_sentences, words};
pub use summarize::summarize;

use crate::core::task::Task;

/// Compile-once regex for a fixed pattern.
macro_rules! re {
    ($pat:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pat).expect("hardcoded pattern is valid"))
    }};
}
pub(crate) use re;

/// Apply `task` to `input`.
pub fn apply(task: Task, input: &str) -> String {
    match task {
        Task::Correct => correct(input),
        Task::Summarize => summarize(input),
        Task::Rewrite => rewrite(input),
        Task::Explain => explain(input),
        Task::Improve => improve(input),
        Task::Convert => numbered_list(input),
        Task::Analyze => analyze(input),
    }
}

/// First `max` characters of `text`, with a trailing ellipsis when truncated.
/// Counts Unicode scalar values, not bytes.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
