//! Notification services - task digests and accept/decline responses

use std::sync::Arc;

use meetline_domain::constants::NO_DEADLINE_LABEL;
use meetline_domain::{
    DispatchReport, Event, EventKind, MeetlineError, NewPendingTask, OutgoingMail, PendingTask,
    Result, TaskStatus,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::digest::{digest_subject, generate_task_token, render_digest};
use super::ports::{Mailer, PendingTaskStore};
use crate::calendar::planner::{task_entry, PlanOptions};
use crate::calendar::ports::CalendarGateway;

/// Where digest links point and who sends them
#[derive(Debug, Clone)]
pub struct DigestSettings {
    pub public_base_url: String,
    pub sender: String,
}

/// Sends one task digest per assignee address
pub struct NotificationService {
    store: Arc<dyn PendingTaskStore>,
    mailer: Arc<dyn Mailer>,
    settings: DigestSettings,
}

impl NotificationService {
    pub fn new(
        store: Arc<dyn PendingTaskStore>,
        mailer: Arc<dyn Mailer>,
        settings: DigestSettings,
    ) -> Self {
        Self { store, mailer, settings }
    }

    /// Group action items by assignee email and send each address a digest.
    ///
    /// A digest that fails to store or send is logged and not counted in
    /// `sent_to`.
    ///
    /// # Errors
    /// Returns `MeetlineError::InvalidInput` when `events` is empty or no
    /// action item carries an email address.
    pub async fn send_digests(&self, events: &[Event]) -> Result<DispatchReport> {
        if events.is_empty() {
            return Err(MeetlineError::InvalidInput("No events provided".to_string()));
        }

        let groups = group_by_assignee(events);
        if groups.is_empty() {
            return Err(MeetlineError::InvalidInput("No tasks with emails found".to_string()));
        }

        let mut report = DispatchReport { sent_to: 0, total_emails: groups.len() };
        for (email, tasks) in &groups {
            match self.send_digest(email, tasks).await {
                Ok(()) => {
                    info!(email = %email, tasks = tasks.len(), "Task digest sent");
                    report.sent_to += 1;
                }
                Err(err) => error!(error = %err, email = %email, "Failed to send task digest"),
            }
        }
        Ok(report)
    }

    async fn send_digest(&self, email: &str, events: &[&Event]) -> Result<()> {
        let mut stored = Vec::with_capacity(events.len());
        for event in events {
            let task = NewPendingTask {
                description: event.description.clone().unwrap_or_else(|| event.message.clone()),
                assignee_email: email.to_string(),
                assignee: event.assignee.clone(),
                deadline: event.deadline.clone().unwrap_or_else(|| NO_DEADLINE_LABEL.to_string()),
                priority: event.priority,
                token: generate_task_token(),
            };
            stored.push(self.store.insert(task).await?);
        }

        let assignee_name = events.first().and_then(|event| event.assignee.as_deref());
        let mail = OutgoingMail {
            from: self.settings.sender.clone(),
            to: email.to_string(),
            subject: digest_subject(stored.len()),
            html_body: render_digest(assignee_name, &stored, &self.settings.public_base_url),
        };
        self.mailer.send(&mail).await
    }
}

/// Action items with an email, grouped by address in first-seen order.
pub fn group_by_assignee(events: &[Event]) -> Vec<(String, Vec<&Event>)> {
    let mut groups: Vec<(String, Vec<&Event>)> = Vec::new();
    for event in events.iter().filter(|event| event.kind == EventKind::ActionItem) {
        let Some(email) = event.contact_email() else {
            continue;
        };
        match groups.iter_mut().find(|(existing, _)| existing == email) {
            Some((_, tasks)) => tasks.push(event),
            None => groups.push((email.to_string(), vec![event])),
        }
    }
    groups
}

/// Outcome of accepting a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedTask {
    pub task: PendingTask,
    /// Calendar event created for the task, when it had a usable deadline
    pub calendar_event_id: Option<String>,
}

/// Handles accept/decline responses to task digests
pub struct TaskResponseService {
    store: Arc<dyn PendingTaskStore>,
    calendar: Arc<dyn CalendarGateway>,
}

impl TaskResponseService {
    pub fn new(store: Arc<dyn PendingTaskStore>, calendar: Arc<dyn CalendarGateway>) -> Self {
        Self { store, calendar }
    }

    /// Accept a pending task and put it in the assignee's calendar.
    ///
    /// Tasks without a usable deadline are accepted without a calendar entry.
    /// If the calendar insert fails the task stays pending.
    ///
    /// # Errors
    /// - `MeetlineError::NotFound` for unknown or already processed tokens
    /// - `MeetlineError::Auth` when a calendar entry is needed but no access
    ///   token is available
    /// - the gateway error when the insert fails
    pub async fn accept(&self, token: &str, access_token: Option<&str>) -> Result<AcceptedTask> {
        let task = self.pending(token).await?;

        let event = task_as_event(&task);
        let entry = task_entry(&event, PlanOptions::new(Some(&task.assignee_email), true));

        let calendar_event_id = match entry {
            Some(entry) => {
                let access_token = access_token.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
                    MeetlineError::Auth(
                        "Please connect your calendar before accepting tasks".to_string(),
                    )
                })?;
                Some(self.calendar.insert_event(access_token, &entry).await?)
            }
            None => {
                warn!(deadline = %task.deadline, "Accepted task has no calendar date");
                None
            }
        };

        self.transition(token, TaskStatus::Accepted).await?;
        info!(token_prefix = %token_prefix(token), "Task accepted");
        Ok(AcceptedTask {
            task: PendingTask { status: TaskStatus::Accepted, ..task },
            calendar_event_id,
        })
    }

    /// Decline a pending task.
    ///
    /// # Errors
    /// Returns `MeetlineError::NotFound` for unknown or already processed tokens.
    pub async fn decline(&self, token: &str) -> Result<PendingTask> {
        let task = self.pending(token).await?;
        self.transition(token, TaskStatus::Declined).await?;
        info!(token_prefix = %token_prefix(token), "Task declined");
        Ok(PendingTask { status: TaskStatus::Declined, ..task })
    }

    async fn pending(&self, token: &str) -> Result<PendingTask> {
        self.store.find_pending(token).await?.ok_or_else(not_found)
    }

    async fn transition(&self, token: &str, status: TaskStatus) -> Result<()> {
        if self.store.resolve(token, status).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}

fn not_found() -> MeetlineError {
    MeetlineError::NotFound("Task not found or already processed".to_string())
}

fn token_prefix(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

fn task_as_event(task: &PendingTask) -> Event {
    let mut event =
        Event::new(EventKind::ActionItem, task.description.clone(), task.created_at, task.priority);
    event.description = Some(task.description.clone());
    event.assignee = task.assignee.clone();
    event.assignee_email = Some(task.assignee_email.clone());
    event.deadline = Some(task.deadline.clone());
    event
}
