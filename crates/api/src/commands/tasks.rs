//! Accept/decline commands for task digest links

use meetline_core::AcceptedTask;
use meetline_domain::{PendingTask, Result};

use crate::context::AppContext;
use crate::utils::logging::execute_logged;

/// Accept the pending task behind `token`.
///
/// # Errors
/// Returns `MeetlineError::NotFound` for unknown or already answered tokens
/// and `MeetlineError::Auth` when a calendar entry is due but no access
/// token was given.
pub async fn accept_task(
    ctx: &AppContext,
    token: &str,
    access_token: Option<&str>,
) -> Result<AcceptedTask> {
    execute_logged("tasks::accept", || ctx.task_responses.accept(token, access_token)).await
}

/// Decline the pending task behind `token`.
///
/// # Errors
/// Returns `MeetlineError::NotFound` for unknown or already answered tokens.
pub async fn decline_task(ctx: &AppContext, token: &str) -> Result<PendingTask> {
    execute_logged("tasks::decline", || ctx.task_responses.decline(token)).await
}
