//! `meetline` command line surface
//!
//! Every subcommand writes its result to stdout as pretty JSON; logs go to
//! stderr.

pub mod calendar;
pub mod health;
pub mod notify;
pub mod parse;
pub mod tasks;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand};
use meetline_domain::{Event, MeetlineError, Result};
use meetline_infra::DocumentSource;
use serde::{Deserialize, Serialize};

pub use calendar::{add_to_calendar, preview};
pub use health::health;
pub use notify::notify;
pub use parse::parse_document;
pub use tasks::{accept_task, decline_task};

use crate::context::AppContext;

/// Meeting document insight pipeline
#[derive(Debug, Parser)]
#[command(name = "meetline", version)]
pub struct Cli {
    /// Configuration file (TOML or JSON); overrides MEETLINE_CONFIG
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines (also MEETLINE_LOG_FORMAT=json)
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract events from a meeting document
    Parse(ParseArgs),
    /// Show which action items would become own tasks or invitations
    Preview {
        /// JSON file with events (`-` for stdin)
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        organizer: String,
    },
    /// Create Google Calendar entries for action items and milestones
    Calendar {
        /// JSON file with events (`-` for stdin)
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        organizer: String,
        /// OAuth access token for the organizer's calendar
        #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,
        /// Only create entries for the organizer's own tasks
        #[arg(long)]
        no_invitations: bool,
    },
    /// Send task digests to every assignee with an email address
    Notify {
        /// JSON file with events (`-` for stdin)
        #[arg(long)]
        events: PathBuf,
    },
    /// Accept a pending task by its link token
    Accept {
        token: String,
        /// OAuth access token used to put the task into a calendar
        #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<String>,
    },
    /// Decline a pending task by its link token
    Decline { token: String },
    /// Report mode, configured credentials and component health
    Health,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "url", "text"])))]
pub struct ParseArgs {
    /// Plain-text or Markdown file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Document URL fetched over HTTP(S)
    #[arg(long)]
    pub url: Option<String>,
    /// Inline document text
    #[arg(long)]
    pub text: Option<String>,
    /// Publish the extracted events to the message queue
    #[arg(long)]
    pub publish: bool,
}

impl ParseArgs {
    pub fn source(&self) -> Option<DocumentSource> {
        if let Some(path) = &self.file {
            return Some(DocumentSource::File(path.clone()));
        }
        if let Some(url) = &self.url {
            return Some(DocumentSource::Url(url.clone()));
        }
        self.text.clone().map(DocumentSource::Text)
    }
}

/// Event files hold either a bare array or the `parse` output object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventsFile {
    List(Vec<Event>),
    Document { events: Vec<Event> },
}

/// Read events from `path`, or stdin when the path is `-`.
///
/// # Errors
/// Returns `MeetlineError::InvalidInput` for unreadable files and JSON that
/// is neither an event array nor an object with an `events` array.
pub async fn read_events(path: &Path) -> Result<Vec<Event>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut tokio::io::stdin(), &mut buf)
            .await
            .map_err(|e| MeetlineError::InvalidInput(format!("Could not read stdin: {e}")))?;
        buf
    } else {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            MeetlineError::InvalidInput(format!("Could not read {}: {e}", path.display()))
        })?
    };

    let parsed: EventsFile = serde_json::from_str(&raw)
        .map_err(|e| MeetlineError::InvalidInput(format!("Invalid events JSON: {e}")))?;
    Ok(match parsed {
        EventsFile::List(events) | EventsFile::Document { events } => events,
    })
}

fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value).context("failed to write JSON output")?;
    writeln!(handle).context("failed to write JSON output")?;
    Ok(())
}

/// Dispatch a parsed command line and print its result.
///
/// # Errors
/// Returns startup failures and any `MeetlineError` raised by the command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Health = cli.command {
        let config = meetline_infra::config::load(cli.config).context("failed to load config")?;
        return write_json(&health(&config).await);
    }

    let ctx = AppContext::load(cli.config).await.context("failed to start meetline")?;

    match cli.command {
        Command::Parse(args) => {
            let source = args
                .source()
                .ok_or_else(|| anyhow::anyhow!("one of --file, --url or --text is required"))?;
            let document = parse_document(&ctx, &source, args.publish).await?;
            write_json(&document.events)
        }
        Command::Preview { events, organizer } => {
            let events = read_events(&events).await?;
            write_json(&preview(&events, &organizer))
        }
        Command::Calendar { events, organizer, access_token, no_invitations } => {
            let events = read_events(&events).await?;
            let summary =
                add_to_calendar(&ctx, &events, &organizer, &access_token, !no_invitations).await?;
            write_json(&summary)
        }
        Command::Notify { events } => {
            let events = read_events(&events).await?;
            write_json(&notify(&ctx, &events).await?)
        }
        Command::Accept { token, access_token } => {
            write_json(&accept_task(&ctx, &token, access_token.as_deref()).await?)
        }
        Command::Decline { token } => write_json(&decline_task(&ctx, &token).await?),
        Command::Health => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["meetline", "parse"]).is_err());
        assert!(
            Cli::try_parse_from(["meetline", "parse", "--text", "a", "--file", "b.txt"]).is_err()
        );

        let cli = Cli::try_parse_from(["meetline", "parse", "--text", "notes", "--publish"])
            .expect("valid command line");
        let Command::Parse(args) = cli.command else { panic!("expected parse") };
        assert!(args.publish);
        assert_eq!(args.source(), Some(DocumentSource::Text("notes".into())));
    }

    #[test]
    fn calendar_flags_parse() {
        let cli = Cli::try_parse_from([
            "meetline",
            "--log-json",
            "calendar",
            "--events",
            "events.json",
            "--organizer",
            "anna@corp.com",
            "--access-token",
            "ya29.token",
            "--no-invitations",
        ])
        .expect("valid command line");

        assert!(cli.log_json);
        let Command::Calendar { organizer, access_token, no_invitations, .. } = cli.command else {
            panic!("expected calendar")
        };
        assert_eq!(organizer, "anna@corp.com");
        assert_eq!(access_token, "ya29.token");
        assert!(no_invitations);
    }

    #[test]
    fn accept_takes_positional_token() {
        let cli = Cli::try_parse_from(["meetline", "accept", "tok-123"]).expect("valid");
        assert!(matches!(cli.command, Command::Accept { ref token, .. } if token == "tok-123"));
    }

    #[tokio::test]
    async fn read_events_accepts_array_and_parse_output() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let event = serde_json::json!({
            "type": "decision",
            "message": "Decision 1: Adopt NATS",
            "timestamp": "2026-06-12T10:00:00Z",
            "priority": "medium"
        });

        let list = dir.path().join("list.json");
        std::fs::write(&list, serde_json::json!([event]).to_string()).expect("write");
        let wrapped = dir.path().join("wrapped.json");
        std::fs::write(&wrapped, serde_json::json!({"events": [event]}).to_string())
            .expect("write");

        assert_eq!(read_events(&list).await.expect("list").len(), 1);
        assert_eq!(read_events(&wrapped).await.expect("wrapped").len(), 1);

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{\"events\": 3}").expect("write");
        assert!(matches!(read_events(&broken).await, Err(MeetlineError::InvalidInput(_))));
    }
}
