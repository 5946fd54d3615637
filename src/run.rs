//! Run modes: logger init, one-shot transform, line loop, and listings.

use std::io::{self, BufRead, Write};

use clap::CommandFactory;
use serde_json::json;

use crate::cli::{self, Args};
use crate::core::config::Config;
use crate::core::controller::{self, Controller, InputPort, OutputPort, Request};
use crate::core::mode::Mode;
use crate::core::task::Task;
use crate::core::{app, paths, render};

/// Initialize env_logger from the -v/-q level; `RUST_LOG` overrides.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Task and mode wire codes for this invocation: CLI flags over config.
fn request_codes(args: &Args, config: &Config) -> (String, String) {
    let task = args
        .task
        .clone()
        .unwrap_or_else(|| config.default_task.clone());
    let mode = args
        .mode
        .clone()
        .unwrap_or_else(|| config.default_mode.clone());
    (task, mode)
}

/// One-shot mode: transform the given text (or stdin) and print one result.
pub fn run_once(args: &Args, config: &Config) -> io::Result<()> {
    let arg = args.text.as_deref().unwrap_or("-");
    let text = if arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        arg.to_string()
    };

    let (task, mode) = request_codes(args, config);
    let req = Request { text, task, mode };
    let output = controller::transform_text(&req);

    if args.plain {
        println!("{}", output);
        return Ok(());
    }

    let mode = Mode::from_code(&req.mode);
    let html = render::render(mode, &output);
    if args.json {
        let report = json!({
            "task": req.task,
            "mode": req.mode,
            "label": mode.map(Mode::label),
            "output": output,
            "html": html,
        });
        let pretty = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{}", pretty);
    } else {
        println!("{}", html);
    }
    Ok(())
}

/// Reader-backed input port: each line is one request with fixed codes.
struct LinePort<R> {
    reader: R,
    task: String,
    mode: String,
}

impl<R: BufRead> InputPort for LinePort<R> {
    fn next_request(&mut self) -> io::Result<Option<Request>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let text = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(Request {
            text,
            task: self.task.clone(),
            mode: self.mode.clone(),
        }))
    }
}

/// Writer-backed output port: one rendered response per line.
struct WriterPort<W>(W);

impl<W: Write> OutputPort for WriterPort<W> {
    fn present(&mut self, html: &str) -> io::Result<()> {
        writeln!(self.0, "{}", html)
    }
}

/// Line mode: one request per stdin line until EOF.
pub fn run_lines(args: &Args, config: &Config) -> io::Result<()> {
    let (task, mode) = request_codes(args, config);
    let stdin = io::stdin();
    let input = LinePort {
        reader: stdin.lock(),
        task,
        mode,
    };
    let mut controller = Controller::new(input, WriterPort(io::stdout()));
    let handled = controller.run()?;
    log::info!("handled {} requests", handled);
    Ok(())
}

/// Print task codes and descriptions.
pub fn print_tasks() {
    for task in Task::ALL {
        println!("{:<10} {}", task.code(), task.description());
    }
}

/// Print mode codes and display labels.
pub fn print_modes() {
    for mode in Mode::ALL {
        println!("{}  {}", mode.code(), mode.label());
    }
}

/// Print config file path and resolved defaults.
pub fn print_config(config: &Config) {
    println!("{} {}", app::NAME, app::VERSION);
    match paths::config_file() {
        Some(path) => {
            let status = if path.exists() { "present" } else { "absent" };
            println!("Config file: {} ({})", path.display(), status);
        }
        None => println!("Config file: <no config directory available>"),
    }
    println!("Default task: {}", config.default_task);
    println!("Default mode: {}", config.default_mode);
}

/// Generate shell completions on stdout.
pub fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, app::NAME, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn line_port_yields_one_request_per_line() {
        let mut port = LinePort {
            reader: io::Cursor::new("first line\nsecond line\n"),
            task: "correct".to_string(),
            mode: "1".to_string(),
        };
        let first = port.next_request().unwrap().unwrap();
        assert_eq!(first.text, "first line");
        assert_eq!(first.task, "correct");
        let second = port.next_request().unwrap().unwrap();
        assert_eq!(second.text, "second line");
        assert!(port.next_request().unwrap().is_none());
    }

    #[test]
    fn line_port_strips_crlf() {
        let mut port = LinePort {
            reader: io::Cursor::new("windows line\r\n"),
            task: "correct".to_string(),
            mode: "1".to_string(),
        };
        assert_eq!(port.next_request().unwrap().unwrap().text, "windows line");
    }

    #[test]
    fn writer_port_appends_newline() {
        let mut port = WriterPort(Vec::new());
        port.present("<div>x</div>").unwrap();
        assert_eq!(port.0, b"<div>x</div>\n");
    }

    #[test]
    fn request_codes_prefer_cli_flags() {
        let args = Args::parse_from(["textsmith", "-t", "analyze", "-m", "7", "x"]);
        let config = Config::default();
        assert_eq!(
            request_codes(&args, &config),
            ("analyze".to_string(), "7".to_string())
        );
    }

    #[test]
    fn request_codes_fall_back_to_config() {
        let args = Args::parse_from(["textsmith", "x"]);
        let config = Config {
            default_task: "convert".to_string(),
            default_mode: "5".to_string(),
        };
        assert_eq!(
            request_codes(&args, &config),
            ("convert".to_string(), "5".to_string())
        );
    }
}
