//! Invitation preview
//!
//! Shows which action items would go to the organizer, which would invite
//! someone else and which have no address, without touching the calendar.

use meetline_domain::constants::FALLBACK_DESCRIPTION;
use meetline_domain::{Event, InvitationPreview, PreviewTask};

const UNKNOWN_ASSIGNEE: &str = "Unknown";

pub fn preview_invitations(events: &[Event], organizer_email: &str) -> InvitationPreview {
    let mut preview = InvitationPreview {
        total_events: events.len(),
        organizer: organizer_email.to_string(),
        ..InvitationPreview::default()
    };

    for event in events.iter().filter(|event| event.is_action_item()) {
        let assignee = event.assignee.clone().unwrap_or_else(|| UNKNOWN_ASSIGNEE.to_string());
        let description =
            event.description.clone().unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

        match event.contact_email() {
            None => preview.details.no_email.push(PreviewTask { assignee, email: None, description }),
            Some(email) if email.eq_ignore_ascii_case(organizer_email.trim()) => {
                preview.details.own.push(PreviewTask { assignee, email: None, description });
            }
            Some(email) => preview.details.others.push(PreviewTask {
                assignee,
                email: Some(email.to_string()),
                description,
            }),
        }
    }

    preview.tasks_for_self = preview.details.own.len();
    preview.tasks_for_others = preview.details.others.len();
    preview.tasks_without_email = preview.details.no_email.len();
    preview
}
