//! Document parsing command

use meetline_core::ProcessedDocument;
use meetline_domain::Result;
use meetline_infra::DocumentSource;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::execute_logged;

/// Load a document, extract its events and optionally publish them.
///
/// # Errors
/// Returns `MeetlineError::InvalidInput` when the document cannot be read or
/// has no text. Model and queue failures never fail the command.
pub async fn parse_document(
    ctx: &AppContext,
    source: &DocumentSource,
    publish: bool,
) -> Result<ProcessedDocument> {
    execute_logged("documents::parse", || async {
        let text = ctx.documents.load(source).await?;
        let document = ctx.extraction.process_document(&text, publish).await?;

        if let Some(report) = &document.publish {
            info!(
                published = report.published,
                failed = report.failed,
                skipped = report.skipped,
                "Queue publication finished"
            );
        }
        info!(events = document.events.len(), "Document parsed");
        Ok(document)
    })
    .await
}
