//! Port interfaces for task notifications

use async_trait::async_trait;
use meetline_domain::{NewPendingTask, OutgoingMail, PendingTask, Result, TaskStatus};

/// Delivers rendered mail
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<()>;
}

/// Persists tasks awaiting an accept/decline response
#[async_trait]
pub trait PendingTaskStore: Send + Sync {
    /// Store a new task in `pending` status
    async fn insert(&self, task: NewPendingTask) -> Result<PendingTask>;

    /// Find a task by token, only while it is still pending
    async fn find_pending(&self, token: &str) -> Result<Option<PendingTask>>;

    /// Move a pending task to `status`.
    ///
    /// Returns `false` when no pending task has this token.
    async fn resolve(&self, token: &str, status: TaskStatus) -> Result<bool>;
}
