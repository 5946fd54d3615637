//! Task selection: the transformation operations and their wire codes.

/// A transformation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Correct,
    Summarize,
    Rewrite,
    Explain,
    Improve,
    Convert,
    Analyze,
}

impl Task {
    /// All tasks, in display order.
    pub const ALL: [Task; 7] = [
        Task::Correct,
        Task::Summarize,
        Task::Rewrite,
        Task::Explain,
        Task::Improve,
        Task::Convert,
        Task::Analyze,
    ];

    /// Parse a wire code. Unknown codes are not an error: the controller
    /// passes text through unchanged for them.
    pub fn from_code(code: &str) -> Option<Task> {
        match code {
            "correct" => Some(Task::Correct),
            "summarize" => Some(Task::Summarize),
            "rewrite" => Some(Task::Rewrite),
            "explain" => Some(Task::Explain),
            "improve" => Some(Task::Improve),
            "convert" => Some(Task::Convert),
            "analyze" => Some(Task::Analyze),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Task::Correct => "correct",
            Task::Summarize => "summarize",
            Task::Rewrite => "rewrite",
            Task::Explain => "explain",
            Task::Improve => "improve",
            Task::Convert => "convert",
            Task::Analyze => "analyze",
        }
    }

    /// Short human description for the `tasks` listing.
    pub fn description(self) -> &'static str {
        match self {
            Task::Correct => "Fix common grammar slips and punctuation spacing",
            Task::Summarize => "Keep the first two sentences",
            Task::Rewrite => "Swap in shorter synonyms and split long clauses",
            Task::Explain => "Restate each sentence on a numbered line",
            Task::Improve => "Normalize spacing and capitalization",
            Task::Convert => "Turn sentences into a numbered list",
            Task::Analyze => "Word and sentence statistics",
        }
    }
}
