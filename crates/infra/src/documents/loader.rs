//! Document loader
//!
//! Turns a file path, URL or inline text into the UTF-8 text handed to the
//! extraction pipeline. Only plain-text formats are read here; PDF and DOCX
//! need an external converter.

use std::path::{Path, PathBuf};
use std::time::Duration;

use meetline_domain::constants::URL_FETCH_TIMEOUT_SECS;
use meetline_domain::{MeetlineError, Result};
use reqwest::Method;
use tracing::{info, warn};
use url::Url;

use crate::http::HttpClient;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "md", "markdown"];

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
    Text(String),
}

/// Reads documents from disk or over HTTP
#[derive(Clone)]
pub struct DocumentLoader {
    http_client: HttpClient,
}

impl DocumentLoader {
    /// Loader whose URL fetches time out after ten seconds.
    pub fn new() -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(URL_FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http_client })
    }

    pub fn with_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Load the text of `source`.
    ///
    /// # Errors
    /// Returns `MeetlineError::InvalidInput` for unsupported file types,
    /// unreadable files or URLs, and documents without any text.
    pub async fn load(&self, source: &DocumentSource) -> Result<String> {
        let text = match source {
            DocumentSource::File(path) => read_file(path).await?,
            DocumentSource::Url(url) => self.fetch_url(url).await?,
            DocumentSource::Text(text) => text.clone(),
        };

        if text.trim().is_empty() {
            return Err(MeetlineError::InvalidInput(
                "Could not extract text from document".to_string(),
            ));
        }

        info!(chars = text.chars().count(), "Document loaded");
        Ok(text)
    }

    async fn fetch_url(&self, raw: &str) -> Result<String> {
        let url = Url::parse(raw.trim())
            .map_err(|e| MeetlineError::InvalidInput(format!("Invalid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(MeetlineError::InvalidInput(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        let response = self
            .http_client
            .send(self.http_client.request(Method::GET, url.clone()))
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "Fetching document failed");
                MeetlineError::InvalidInput(format!("Could not fetch URL: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MeetlineError::InvalidInput(format!("Could not fetch URL: HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| MeetlineError::InvalidInput(format!("Could not read URL body: {e}")))
    }
}

async fn read_file(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(MeetlineError::InvalidInput(format!(
            "Unsupported file type '{}'. Use TXT or MD (convert PDF/DOCX to text first)",
            if extension.is_empty() { "none" } else { extension.as_str() }
        )));
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        MeetlineError::InvalidInput(format!("Could not read {}: {e}", path.display()))
    })?;

    String::from_utf8(bytes).map_err(|_| {
        MeetlineError::InvalidInput(format!("{} is not valid UTF-8 text", path.display()))
    })
}
