#![allow(dead_code)]

use std::sync::Arc;

use meetline_infra::{DbManager, SqlitePendingTaskStore};
use tempfile::TempDir;

/// Temporary pending-task database that lives as long as the value.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    pub dir: TempDir,
}

impl TestDatabase {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let manager =
            DbManager::new(dir.path().join("meetline.db"), 2).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");
        Self { manager: Arc::new(manager), dir }
    }

    pub fn store(&self) -> SqlitePendingTaskStore {
        SqlitePendingTaskStore::new(Arc::clone(&self.manager))
    }

    pub fn spool_files(&self) -> Vec<std::path::PathBuf> {
        let spool = self.dir.path().join("outbox");
        let mut files: Vec<_> = std::fs::read_dir(spool)
            .map(|entries| entries.filter_map(|e| e.ok().map(|e| e.path())).collect())
            .unwrap_or_default();
        files.sort();
        files
    }
}
