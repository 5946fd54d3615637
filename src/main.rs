//! # Textsmith - heuristic text utilities CLI
//!
//! Entry point: parses arguments, initializes logging, loads configuration,
//! and dispatches to the selected run mode.

mod cli;
mod core;
mod run;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = match &args.command {
        Some(cli::Commands::Tasks) => {
            run::print_tasks();
            Ok(())
        }
        Some(cli::Commands::Modes) => {
            run::print_modes();
            Ok(())
        }
        Some(cli::Commands::Config) => {
            run::print_config(&config);
            Ok(())
        }
        Some(cli::Commands::Completions { shell }) => {
            run::print_completions(*shell);
            Ok(())
        }
        None if args.interactive => run::run_lines(&args, &config),
        None => run::run_once(&args, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
