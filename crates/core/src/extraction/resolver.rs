//! Assignee email resolution
//!
//! Fills `assignee_email` on structured action items from the participant
//! lookup: exact name first, then the assignee's first token. A hit
//! overwrites whatever the model returned; a miss leaves the item alone.

use meetline_domain::{ExtractionResult, NameLookup};
use tracing::debug;

/// Resolve assignee emails in place. Returns the number of items updated.
pub fn resolve_assignees(result: &mut ExtractionResult, lookup: &NameLookup) -> usize {
    let mut resolved = 0;

    for item in result.action_items.iter_mut().filter_map(|item| item.as_structured_mut()) {
        let Some(assignee) = item.assignee.as_deref().map(str::trim).filter(|a| !a.is_empty())
        else {
            continue;
        };

        let email = lookup.get(assignee).or_else(|| {
            assignee.split_whitespace().next().and_then(|first| lookup.get(first))
        });

        match email {
            Some(email) => {
                debug!(assignee, email, "Resolved assignee email");
                item.assignee_email = Some(email.to_string());
                resolved += 1;
            }
            None => debug!(assignee, "No email found for assignee"),
        }
    }

    resolved
}
