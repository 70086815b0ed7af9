//! Calendar commands

use meetline_core::{preview_invitations, PlanOptions};
use meetline_domain::{CalendarSummary, Event, InvitationPreview, Result};

use crate::context::AppContext;
use crate::utils::logging::execute_logged;

/// Split action items into own tasks, invitations and tasks without email.
pub fn preview(events: &[Event], organizer: &str) -> InvitationPreview {
    preview_invitations(events, organizer)
}

/// Insert calendar entries for the organizer.
///
/// # Errors
/// Returns `MeetlineError::InvalidInput` when there are no events and
/// `MeetlineError::Auth` for a blank access token. Failed single inserts
/// are counted in the summary instead.
pub async fn add_to_calendar(
    ctx: &AppContext,
    events: &[Event],
    organizer: &str,
    access_token: &str,
    send_invitations: bool,
) -> Result<CalendarSummary> {
    execute_logged("calendar::add_events", || async {
        ctx.calendar
            .add_events(access_token, events, PlanOptions::new(Some(organizer), send_invitations))
            .await
    })
    .await
}
