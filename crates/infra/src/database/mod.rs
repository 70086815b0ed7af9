//! Database implementations

pub mod manager;
pub mod pending_task_repository;

pub use manager::DbManager;
pub use pending_task_repository::SqlitePendingTaskStore;
