//! Participant scanning
//!
//! Finds `Name email` pairs in raw meeting text. A name is one or more
//! capitalised words (`Maya`, `Maya Schmidt`) followed by whitespace and an
//! email address. Every match registers the full name and its first token in
//! the lookup; bare email addresses without a preceding name are ignored.

use meetline_domain::{NameLookup, Participant};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})")
        .expect("NAME_EMAIL_PATTERN should compile - this is a bug")
});

/// Participants found in a document and the lookup built from them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantScan {
    pub participants: Vec<Participant>,
    pub lookup: NameLookup,
}

/// Scan `text` for participants in document order.
pub fn extract_participants(text: &str) -> ParticipantScan {
    let mut scan = ParticipantScan::default();

    for captures in NAME_EMAIL_PATTERN.captures_iter(text) {
        let (Some(name), Some(email)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let participant = Participant::new(name.as_str().trim(), email.as_str());
        scan.lookup.register(&participant);
        scan.participants.push(participant);
    }

    tracing::debug!(participants = scan.participants.len(), "Scanned document for participants");
    scan
}
