//! SQLite implementation of the pending task store
//!
//! Tasks are looked up by their link token and can leave the `pending`
//! status exactly once; the status guard lives in the UPDATE itself.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use meetline_core::PendingTaskStore;
use meetline_domain::{MeetlineError, NewPendingTask, PendingTask, Priority, Result, TaskStatus};
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;

use super::manager::{map_sql_error, DbManager};
use crate::errors::conversions::map_join_error;

const SELECT_COLUMNS: &str = "id, description, assignee_email, assignee, deadline, priority, token, status, created_at";

/// Pending task store on top of [`DbManager`]
pub struct SqlitePendingTaskStore {
    db: Arc<DbManager>,
}

impl SqlitePendingTaskStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PendingTaskStore for SqlitePendingTaskStore {
    async fn insert(&self, task: NewPendingTask) -> Result<PendingTask> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<PendingTask> {
            let conn = db.get_connection()?;
            let created_at = now_seconds();

            conn.execute(
                "INSERT INTO pending_tasks (description, assignee_email, assignee, deadline, priority, token, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    task.description,
                    task.assignee_email,
                    task.assignee,
                    task.deadline,
                    task.priority.to_string(),
                    task.token,
                    TaskStatus::Pending.to_string(),
                    created_at.timestamp(),
                ],
            )
            .map_err(map_sql_error)?;

            Ok(PendingTask {
                id: conn.last_insert_rowid(),
                description: task.description,
                assignee_email: task.assignee_email,
                assignee: task.assignee,
                deadline: task.deadline,
                priority: task.priority,
                token: task.token,
                status: TaskStatus::Pending,
                created_at,
            })
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_pending(&self, token: &str) -> Result<Option<PendingTask>> {
        let db = Arc::clone(&self.db);
        let token = token.to_string();

        task::spawn_blocking(move || -> Result<Option<PendingTask>> {
            let conn = db.get_connection()?;
            let sql = format!("SELECT {SELECT_COLUMNS} FROM pending_tasks WHERE token = ?1 AND status = ?2");

            let row = conn
                .query_row(&sql, params![token, TaskStatus::Pending.to_string()], read_row)
                .optional()
                .map_err(map_sql_error)?;

            row.map(into_task).transpose()
        })
        .await
        .map_err(map_join_error)?
    }

    async fn resolve(&self, token: &str, status: TaskStatus) -> Result<bool> {
        if status == TaskStatus::Pending {
            return Err(MeetlineError::InvalidInput(
                "A task can only be resolved to accepted or declined".to_string(),
            ));
        }

        let db = Arc::clone(&self.db);
        let token = token.to_string();

        task::spawn_blocking(move || -> Result<bool> {
            let conn = db.get_connection()?;
            let changed = conn
                .execute(
                    "UPDATE pending_tasks SET status = ?1, responded_at = ?2 WHERE token = ?3 AND status = ?4",
                    params![
                        status.to_string(),
                        Utc::now().timestamp(),
                        token,
                        TaskStatus::Pending.to_string()
                    ],
                )
                .map_err(map_sql_error)?;
            Ok(changed == 1)
        })
        .await
        .map_err(map_join_error)?
    }
}

struct TaskRow {
    id: i64,
    description: String,
    assignee_email: String,
    assignee: Option<String>,
    deadline: String,
    priority: String,
    token: String,
    status: String,
    created_at: i64,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        id: row.get(0)?,
        description: row.get(1)?,
        assignee_email: row.get(2)?,
        assignee: row.get(3)?,
        deadline: row.get(4)?,
        priority: row.get(5)?,
        token: row.get(6)?,
        status: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn into_task(row: TaskRow) -> Result<PendingTask> {
    let priority: Priority = row.priority.parse().map_err(MeetlineError::Storage)?;
    let status: TaskStatus = row.status.parse().map_err(MeetlineError::Storage)?;
    let created_at = DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| {
        MeetlineError::Storage(format!("invalid created_at timestamp: {}", row.created_at))
    })?;

    Ok(PendingTask {
        id: row.id,
        description: row.description,
        assignee_email: row.assignee_email,
        assignee: row.assignee,
        deadline: row.deadline,
        priority,
        token: row.token,
        status,
        created_at,
    })
}

fn now_seconds() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}
