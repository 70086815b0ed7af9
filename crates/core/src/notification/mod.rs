//! Task digests and accept/decline handling

pub mod digest;
pub mod ports;
pub mod service;

pub use digest::{digest_subject, generate_task_token, render_digest};
pub use service::{
    group_by_assignee, AcceptedTask, DigestSettings, NotificationService, TaskResponseService,
};
