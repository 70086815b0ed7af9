use std::future::Future;
use std::time::{Duration, Instant};

use meetline_domain::{MeetlineError, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";
const LOG_FORMAT_ENV: &str = "MEETLINE_LOG_FORMAT";

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG` (default `info`) and writes to stderr so stdout only
/// carries command output. JSON lines are used when `json` is set or
/// `MEETLINE_LOG_FORMAT=json`.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json = json || wants_json_format(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber installed earlier (e.g. by a test harness) stays in place.
    let _ = if json { builder.json().try_init() } else { builder.try_init() };
}

fn wants_json_format(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"tasks::accept"`.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    error_type: Option<&'static str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "command_execution_failure"),
    }
}

/// Convert a `MeetlineError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &MeetlineError) -> &'static str {
    match error {
        MeetlineError::Config(_) => "config",
        MeetlineError::Network(_) => "network",
        MeetlineError::Auth(_) => "auth",
        MeetlineError::Storage(_) => "storage",
        MeetlineError::NotFound(_) => "not_found",
        MeetlineError::InvalidInput(_) => "invalid_input",
        MeetlineError::Internal(_) => "internal",
    }
}

/// Run a command body, timing it and logging the outcome.
pub async fn execute_logged<F, Fut, T>(command: &str, command_fn: F) -> Result<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    log_command_execution(command, start.elapsed(), result.as_ref().err().map(error_label));
    result
}
