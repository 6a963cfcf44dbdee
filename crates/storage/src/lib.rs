use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use repository::{HomeCourse, MemoryStore, NotificationLog};

/// Everything the application holds, guarded as one unit.
#[derive(Debug, Default)]
pub struct DataSet {
    pub store: MemoryStore,
    pub notifications: NotificationLog,
    pub course: HomeCourse,
}

/// Shared handle to the data set.
///
/// Score saves and verifications run under the write guard, so two admins can
/// never interleave a save and a verify on the same card.
#[derive(Debug, Clone, Default)]
pub struct Database {
    state: Arc<RwLock<DataSet>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, DataSet> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, DataSet> {
        self.state.write().await
    }
}
