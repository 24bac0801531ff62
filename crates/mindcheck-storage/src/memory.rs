use tokio::sync::RwLock;

use mindcheck_core::models::result::{RecordId, ResultFilter, TestResultRecord, newest_first};

use crate::error::StorageError;

/// In-process result log. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryResults {
    records: RwLock<Vec<TestResultRecord>>,
}

impl MemoryResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: TestResultRecord) {
        self.records.write().await.push(record);
    }

    pub async fn list_by_user(&self, user_id: &str) -> Vec<TestResultRecord> {
        let mut found: Vec<TestResultRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.is_owned_by(user_id))
            .cloned()
            .collect();
        newest_first(&mut found);
        found
    }

    pub async fn list_all(&self, filter: &ResultFilter) -> Vec<TestResultRecord> {
        let mut found: Vec<TestResultRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        newest_first(&mut found);
        found
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<TestResultRecord, StorageError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: id.to_string(),
            })
    }

    pub async fn detach_user(&self, user_id: &str) -> usize {
        let mut records = self.records.write().await;
        let mut detached = 0;
        for record in records.iter_mut().filter(|r| r.is_owned_by(user_id)) {
            record.user = None;
            detached += 1;
        }
        detached
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
