use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use meetline_core::{Mailer, PendingTaskStore};
use meetline_domain::{
    MeetlineError, NewPendingTask, OutgoingMail, PendingTask, Result as DomainResult, TaskStatus,
};

/// In-memory mock for `PendingTaskStore`.
#[derive(Default, Clone)]
pub struct InMemoryTaskStore {
    tasks: Arc<Mutex<Vec<PendingTask>>>,
}

impl InMemoryTaskStore {
    pub fn tasks(&self) -> Vec<PendingTask> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl PendingTaskStore for InMemoryTaskStore {
    async fn insert(&self, task: NewPendingTask) -> DomainResult<PendingTask> {
        let mut tasks = self.tasks.lock().unwrap();
        let stored = PendingTask {
            id: tasks.len() as i64 + 1,
            description: task.description,
            assignee_email: task.assignee_email,
            assignee: task.assignee,
            deadline: task.deadline,
            priority: task.priority,
            token: task.token,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        };
        tasks.push(stored.clone());
        Ok(stored)
    }

    async fn find_pending(&self, token: &str) -> DomainResult<Option<PendingTask>> {
        Ok(self.tasks.lock().unwrap().iter().find(|t| t.token == token && t.is_pending()).cloned())
    }

    async fn resolve(&self, token: &str, status: TaskStatus) -> DomainResult<bool> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| t.token == token && t.is_pending()) {
            Some(task) => {
                task.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Mailer that records outgoing mail; addresses in `rejected` fail.
#[derive(Default, Clone)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    rejected: Vec<String>,
}

impl RecordingMailer {
    pub fn rejecting(address: &str) -> Self {
        Self { rejected: vec![address.to_string()], ..Self::default() }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> DomainResult<()> {
        if self.rejected.contains(&mail.to) {
            return Err(MeetlineError::Network(format!("mailbox {} unavailable", mail.to)));
        }
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}
