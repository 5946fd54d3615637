//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  textsmith \"i am teh best.\"           Correct grammar, HTML fragment out
  textsmith -t summarize -m 6 \"...\"    Summarize with the Quick Answer label
  textsmith -t analyze --plain -       Analyze text read from stdin
  textsmith -t convert --json \"A. B.\"  Machine-readable report
  textsmith -i -t improve              Transform stdin line by line
  textsmith tasks                      List task codes
  textsmith modes                      List mode labels
  textsmith config                     Show config path and defaults
  textsmith completions bash           Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Heuristic text utilities: correct, summarize, rewrite, explain, improve, convert, analyze",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to transform (use '-' or omit to read from stdin)
    pub text: Option<String>,

    /// Task code (correct, summarize, rewrite, explain, improve, convert, analyze)
    #[arg(short = 't', long)]
    pub task: Option<String>,

    /// Mode code 1-7 selecting the display label (Professional .. Detailed Analysis)
    #[arg(short = 'm', long)]
    pub mode: Option<String>,

    /// Print the transformed text only, without the HTML wrapper
    #[arg(long, conflicts_with = "json")]
    pub plain: bool,

    /// Print a JSON report (task, mode, label, output, html)
    #[arg(long)]
    pub json: bool,

    /// Treat each stdin line as one request instead of reading stdin whole
    #[arg(short = 'i', long, conflicts_with = "text")]
    pub interactive: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List task codes and what they do
    Tasks,
    /// List mode codes and display labels
    Modes,
    /// Show config file path and resolved defaults
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
