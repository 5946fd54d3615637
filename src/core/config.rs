//! Configuration: default task and mode codes.
//!
//! Precedence: CLI flags, then `TEXTSMITH_TASK`/`TEXTSMITH_MODE` environment
//! variables, then `config.json` in the platform config directory, then
//! built-in defaults. Unknown codes are tolerated here; the controller
//! decides what they mean.

use std::env;
use std::fs;

use serde::Deserialize;

use crate::core::paths;

pub const DEFAULT_TASK: &str = "correct";
pub const DEFAULT_MODE: &str = "1";

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub default_task: String,
    pub default_mode: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_task: DEFAULT_TASK.to_string(),
            default_mode: DEFAULT_MODE.to_string(),
        }
    }
}

/// Error reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON structure on disk. Both fields optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    default_task: Option<String>,
    default_mode: Option<String>,
}

fn parse(content: &str) -> Result<ConfigFile, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Load configuration from `~/.config/textsmith/config.json` (when present)
/// with env overrides. A missing file is not an error; unreadable or invalid
/// content is.
pub fn load() -> Result<Config, ConfigError> {
    let mut file = ConfigFile::default();
    if let Some(path) = paths::config_file()
        && path.exists()
    {
        file = parse(&fs::read_to_string(&path)?)?;
        log::debug!("loaded config from {}", path.display());
    }

    let mut config = Config::default();
    if let Some(task) = file.default_task {
        config.default_task = task;
    }
    if let Some(mode) = file.default_mode {
        config.default_mode = mode;
    }
    if let Ok(task) = env::var("TEXTSMITH_TASK") {
        config.default_task = task;
    }
    if let Ok(mode) = env::var("TEXTSMITH_MODE") {
        config.default_mode = mode;
    }
    Ok(config)
}
