//! Task digest command

use meetline_domain::{DispatchReport, Event, Result};

use crate::context::AppContext;
use crate::utils::logging::execute_logged;

/// Send one digest per assignee address found in `events`.
///
/// # Errors
/// Returns `MeetlineError::InvalidInput` when there are no events or no
/// action item has an email address.
pub async fn notify(ctx: &AppContext, events: &[Event]) -> Result<DispatchReport> {
    execute_logged("notifications::send_digests", || ctx.notifications.send_digests(events)).await
}
