//! Extraction instruction for the language model
//!
//! The prompt is a single `[INST]` block: task steps, the output schema,
//! worked examples and the folding rules, followed by the (truncated)
//! meeting document. Identical input always yields an identical prompt.

use meetline_domain::constants::{DEFAULT_REFERENCE_YEAR, MAX_PROMPT_DOCUMENT_CHARS};

const RULE: &str = "═══════════════════════════════════════════════════════════════════";

const INSTRUCTIONS: &str = r#"STEP 1: PARTICIPANTS
Look for attendee sections ("Attendees:", "PARTICIPANTS", "Teilnehmer:").
Collect every name/email pair, in any of these forms:
- "Name Email"     e.g. "Manel Khammari khamarimanel11@gmail.com"
- "Name, Email"    e.g. "Lena M., lena@company.com"
- "Name (Email)"   e.g. "Thomas (thomas@company.com)"
- email addresses anywhere else in the document
Keep a NAME -> EMAIL mapping for the task assignments below.

STEP 2: ACTION ITEMS
Search the whole document, not only dedicated sections. Typical phrasings:
- "Action: Name to do X by DATE"
- "Name will / should / must / needs to / agreed to do X by DATE"
- "Name volunteered to do X"
- "Name (email@domain.com) will do X by DATE" or "email@domain.com will do X by DATE"
- German stand-ups: "Name - does X", "Name: does X", "Ticket ### Description → Name",
  items under "Aufgaben zu nächster Woche" and "Neue Tickets"
- Implicit tasks in DECISION, AGREEMENT, ACTION REQUIRED and RESPONSIBILITIES
  sections; "Someone should..." is a task without assignee, "We need to..." a team task
For each task return:
- description: clear task description
- assignee: the person's NAME (not the email)
- assignee_email: from the participant mapping or the text
- deadline: DD.MM.YYYY
- priority: high | medium | low

STEP 3: DATES
Write every date as DD.MM.YYYY and assume the year {year} when none is given.
- "June 17" -> 17.06.{year}; "Friday (June 13)" -> 13.06.{year}
- "February 18th" -> 18.02.{year}; "March 1st" -> 01.03.{year}
- "17.06.2025" stays 17.06.2025; "Ende august" -> 31.08.{year}
- "by end of this week", "Thursday EOD", "next week", "by Friday noon":
  resolve to the concrete day

RULES
1. Impediments, problems, blockers and issues ("Hindernis", "Problem", "Blocker") are RISKS.
2. "Ticket XX → Name" is an ACTION ITEM assigned to Name.
3. A line of the form "DD.MM.YYYY event description" is a MILESTONE.
4. Documentation or audit deadlines ("documentation must be finished by X") are COMPLIANCE.
5. Extract participants before tasks and use their emails for assignees.
6. Include every task, even when the assignee is unclear."#;

const SCHEMA: &str = r#"{
  "participants": [{"name": "Full Name", "email": "email@domain.com"}],
  "action_items": [{
    "description": "Task description",
    "assignee": "Person Name",
    "assignee_email": "email@domain.com",
    "deadline": "DD.MM.YYYY",
    "priority": "high|medium|low"
  }],
  "decisions": ["Decision text"],
  "changes": ["Change description"],
  "risks": [{"description": "Risk description", "severity": "high|medium|low", "raised_by": "Person Name or null"}],
  "questions": [{"question": "Question text", "asked_by": "Person Name or null"}],
  "agreements": ["Agreement text"],
  "delays": [{"item": "What was delayed", "original_date": "DD.MM.YYYY or null", "new_date": "DD.MM.YYYY or null", "reason": "Reason"}],
  "milestones": [{"event": "Event name", "date": "DD.MM.YYYY", "owner": "Person Name or null"}],
  "reminders": [{"reminder": "Reminder text", "deadline": "DD.MM.YYYY or null"}],
  "compliance": [{"item": "Compliance item", "type": "audit|security|compliance|documentation", "deadline": "DD.MM.YYYY or null", "owner": "Person Name or null"}]
}"#;

const EXAMPLES: &str = r#"INPUT: "Manel Khammari khamarimanel11@gmail.com"
OUTPUT: {"participants": [{"name": "Manel Khammari", "email": "khamarimanel11@gmail.com"}]}

INPUT: "Lilwan will create documentation by February 18th"
PARTICIPANTS: [{"name": "Lilwan Akid", "email": "lakid@stud.hs-bremen.de"}]
OUTPUT: {"action_items": [{"description": "Create comprehensive architecture documentation", "assignee": "Lilwan Akid", "assignee_email": "lakid@stud.hs-bremen.de", "deadline": "18.02.{year}", "priority": "high"}]}

INPUT: "Thomas to prepare benchmarks by next Tuesday (June 17)"
OUTPUT: {"action_items": [{"description": "Prepare benchmarks comparing RabbitMQ and NATS", "assignee": "Thomas", "assignee_email": null, "deadline": "17.06.{year}", "priority": "high"}]}

INPUT: "Ticket 70 Test Imens Crawler → Jonas"
OUTPUT: {"action_items": [{"description": "Test Imens Crawler (Ticket 70)", "assignee": "Jonas", "assignee_email": null, "deadline": null, "priority": "medium"}]}

INPUT: "Maya volunteered to write unit tests. Goal: 70% coverage by March 1st"
OUTPUT: {"action_items": [{"description": "Write unit tests for document parsing module (70% coverage)", "assignee": "Maya", "assignee_email": null, "deadline": "01.03.{year}", "priority": "high"}]}

INPUT: "Manel (khamarimanel11@gmail.com) should enhance AI parser by February 20th"
OUTPUT: {"action_items": [{"description": "Enhance AI parser to detect natural language assignments", "assignee": "Manel", "assignee_email": "khamarimanel11@gmail.com", "deadline": "20.02.{year}", "priority": "high"}]}

INPUT: "Still some impediments like unreliableJonas"
OUTPUT: {"risks": [{"description": "Unreliable Jonas causing impediments", "severity": "medium", "raised_by": null}]}"#;

/// First `MAX_PROMPT_DOCUMENT_CHARS` characters of the document.
pub fn document_excerpt(text: &str) -> &str {
    match text.char_indices().nth(MAX_PROMPT_DOCUMENT_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Build the extraction instruction for a meeting document.
pub fn build_prompt(text: &str) -> String {
    let year = DEFAULT_REFERENCE_YEAR.to_string();
    let instructions = INSTRUCTIONS.replace("{year}", &year);
    let examples = EXAMPLES.replace("{year}", &year);
    let document = document_excerpt(text);

    format!(
        "[INST] You are an expert meeting protocol analyzer. Extract ALL tasks, decisions, \
         participants, and events.\n\n\
         {RULE}\n{instructions}\n\n\
         {RULE}\nOUTPUT FORMAT (VALID JSON ONLY)\n{RULE}\n\n{SCHEMA}\n\n\
         {RULE}\nEXAMPLES\n{RULE}\n\n{examples}\n\n\
         {RULE}\nMEETING DOCUMENT TO ANALYZE\n{RULE}\n\n{document}\n\n{RULE}\n\n\
         CRITICAL: Extract participants FIRST, then use their emails for task assignments.\n\
         Return ONLY valid JSON. No explanations, no markdown, no code blocks.\n[/INST]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_characters_not_bytes() {
        let text = "ä".repeat(MAX_PROMPT_DOCUMENT_CHARS + 10);
        let excerpt = document_excerpt(&text);

        assert_eq!(excerpt.chars().count(), MAX_PROMPT_DOCUMENT_CHARS);
        assert_eq!(excerpt.len(), MAX_PROMPT_DOCUMENT_CHARS * 2);
    }

    #[test]
    fn short_documents_are_kept_whole() {
        assert_eq!(document_excerpt("Weekly sync"), "Weekly sync");
    }

    #[test]
    fn prompt_is_deterministic() {
        let text = "Maya volunteered to write unit tests by March 1st";
        assert_eq!(build_prompt(text), build_prompt(text));
    }

    #[test]
    fn prompt_embeds_document_schema_and_year() {
        let prompt = build_prompt("Ticket 71 Crawler → Jonas");

        assert!(prompt.starts_with("[INST]"));
        assert!(prompt.ends_with("[/INST]"));
        assert!(prompt.contains("Ticket 71 Crawler → Jonas"));
        assert!(prompt.contains("\"compliance\": [{\"item\""));
        assert!(prompt.contains("assume the year 2026"));
        assert!(!prompt.contains("{year}"));
    }

    #[test]
    fn text_beyond_limit_is_not_sent() {
        let mut text = "a".repeat(MAX_PROMPT_DOCUMENT_CHARS);
        text.push_str("TAIL-MARKER");
        assert!(!build_prompt(&text).contains("TAIL-MARKER"));
    }
}
