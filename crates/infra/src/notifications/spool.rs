//! Spool-directory mailer
//!
//! Writes each digest as an `.eml` file into a directory that a separate
//! relay (or a human) picks up. SMTP delivery itself stays outside this
//! crate.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use meetline_core::Mailer;
use meetline_domain::{MeetlineError, OutgoingMail, Result};
use tracing::info;

use crate::errors::InfraError;

/// [`Mailer`] that writes RFC 5322 style messages to a spool directory
pub struct SpoolMailer {
    dir: PathBuf,
    sequence: AtomicU64,
}

impl SpoolMailer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), sequence: AtomicU64::new(0) }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(&self, to: &str) -> String {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let recipient: String = to
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        format!("{}-{sequence:04}-{recipient}.eml", Utc::now().format("%Y%m%dT%H%M%S%3f"))
    }
}

fn render_message(mail: &OutgoingMail) -> String {
    format!(
        "From: {}\r\nTo: {}\r\nSubject: {}\r\nDate: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/html; charset=utf-8\r\n\r\n{}",
        header_value(&mail.from),
        header_value(&mail.to),
        header_value(&mail.subject),
        Utc::now().to_rfc2822(),
        mail.html_body
    )
}

/// Header values must stay on one line.
fn header_value(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

#[async_trait]
impl Mailer for SpoolMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        if mail.to.trim().is_empty() {
            return Err(MeetlineError::InvalidInput("Mail has no recipient".to_string()));
        }

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| MeetlineError::from(InfraError::from(e)))?;

        let path = self.dir.join(self.file_name(&mail.to));
        tokio::fs::write(&path, render_message(mail))
            .await
            .map_err(|e| MeetlineError::from(InfraError::from(e)))?;

        info!(to = %mail.to, path = %path.display(), "Mail spooled");
        Ok(())
    }
}
