//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Read the config file named by `--config`, `MEETLINE_CONFIG`, or the
//!    first file found by [`probe_config_paths`]; no file means defaults
//! 2. Apply environment overrides on top
//! 3. Supports JSON and TOML formats
//!
//! `.env` files are loaded by the binary before this runs, so variables
//! from there count as environment.
//!
//! ## Environment Variables
//! - `OPENROUTER_API_KEY`: completion endpoint credential
//! - `MOCK_MODE`: `true` selects the deterministic invoker
//! - `MEETLINE_MODEL`, `MEETLINE_API_URL`: completion model and endpoint
//! - `MEETLINE_TIMEOUT_SECS`, `MEETLINE_MAX_ATTEMPTS`: model call deadline and attempts
//! - `MEETLINE_CALENDAR_API`: calendar API base URL
//! - `CLOUDAMQP_URL`: RabbitMQ URL (management API is derived from it)
//! - `MEETLINE_PUBLIC_URL`: base URL for accept/decline links
//! - `MEETLINE_SPOOL_DIR`: outgoing mail spool directory
//! - `EMAIL_USERNAME`: digest sender address
//! - `MEETLINE_DB_PATH`: pending task database

use std::path::{Path, PathBuf};
use std::str::FromStr;

use meetline_domain::{Config, InvokerMode, MeetlineError, Result};

/// Load configuration: file (optional) first, environment on top.
///
/// The result is not validated; callers that need a live model call
/// [`Config::validate`] before wiring services.
///
/// # Errors
/// Returns `MeetlineError::Config` if an explicitly named file is missing or
/// malformed, or an environment value cannot be parsed.
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.or_else(|| non_empty_env("MEETLINE_CONFIG").map(PathBuf::from));

    let mut config = match explicit {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `MeetlineError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MeetlineError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MeetlineError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MeetlineError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MeetlineError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MeetlineError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MeetlineError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory and the executable's directory for
/// `meetline.{toml,json}` and `config.{toml,json}`.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["meetline.toml", "meetline.json", "config.toml", "config.json"];

    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Overlay environment variables on `config`.
///
/// # Errors
/// Returns `MeetlineError::Config` for unparsable numeric values.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(key) = non_empty_env("OPENROUTER_API_KEY") {
        config.model.api_key = Some(key);
    }
    if std::env::var("MOCK_MODE").is_ok() {
        config.model.mode = if env_bool("MOCK_MODE", false) {
            InvokerMode::Deterministic
        } else {
            InvokerMode::Live
        };
    }
    if let Some(model) = non_empty_env("MEETLINE_MODEL") {
        config.model.model = model;
    }
    if let Some(url) = non_empty_env("MEETLINE_API_URL") {
        config.model.api_url = url;
    }
    if let Some(timeout) = env_parse::<u64>("MEETLINE_TIMEOUT_SECS")? {
        config.model.timeout_seconds = timeout;
    }
    if let Some(attempts) = env_parse::<u32>("MEETLINE_MAX_ATTEMPTS")? {
        config.model.max_attempts = attempts;
    }
    if let Some(api_base) = non_empty_env("MEETLINE_CALENDAR_API") {
        config.calendar.api_base = api_base;
    }
    if let Some(url) = non_empty_env("CLOUDAMQP_URL") {
        config.queue.management_url = Some(url);
    }
    if let Some(port) = env_parse::<u16>("MEETLINE_QUEUE_MANAGEMENT_PORT")? {
        config.queue.management_port = Some(port);
    }
    if let Some(url) = non_empty_env("MEETLINE_PUBLIC_URL") {
        config.notifications.public_base_url = url;
    }
    if let Some(dir) = non_empty_env("MEETLINE_SPOOL_DIR") {
        config.notifications.spool_dir = PathBuf::from(dir);
    }
    if let Some(sender) = non_empty_env("EMAIL_USERNAME") {
        config.notifications.sender = sender;
    }
    if let Some(path) = non_empty_env("MEETLINE_DB_PATH") {
        config.storage.pending_tasks_path = PathBuf::from(path);
    }
    Ok(())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    non_empty_env(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| MeetlineError::Config(format!("Invalid value for {}: {}", key, e)))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
