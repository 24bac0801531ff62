use aws_sdk_s3::Client;

use mindcheck_core::models::features::FeatureVector;
use mindcheck_core::models::prediction::PredictionResult;
use mindcheck_core::models::result::{RecordId, ResultFilter, TestResultRecord};
use mindcheck_core::models::user::UserRef;

use crate::error::StorageError;
use crate::memory::MemoryResults;
use crate::s3::S3Results;

/// Append-only log of test results with per-user lookup.
pub enum ResultStore {
    Memory(MemoryResults),
    S3(S3Results),
}

impl ResultStore {
    pub fn memory() -> Self {
        ResultStore::Memory(MemoryResults::new())
    }

    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        ResultStore::S3(S3Results::new(client, bucket))
    }

    /// Record a new result, timestamped now. Returns the new record's id.
    pub async fn append(
        &self,
        user: Option<&UserRef>,
        prediction: &PredictionResult,
        answers: &FeatureVector,
    ) -> Result<RecordId, StorageError> {
        let record = TestResultRecord::new(user.cloned(), prediction, *answers);
        let id = record.id;
        self.insert(record).await?;
        tracing::debug!(id = %id, user = user.map(|u| u.id.as_str()), "result appended");
        Ok(id)
    }

    /// Persist an already-built record.
    pub async fn insert(&self, record: TestResultRecord) -> Result<(), StorageError> {
        match self {
            ResultStore::Memory(store) => {
                store.insert(record).await;
                Ok(())
            }
            ResultStore::S3(store) => store.insert(&record).await,
        }
    }

    /// A user's results, newest first. Empty when they have none.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<TestResultRecord>, StorageError> {
        match self {
            ResultStore::Memory(store) => Ok(store.list_by_user(user_id).await),
            ResultStore::S3(store) => store.list_by_user(user_id).await,
        }
    }

    /// Results from every user (and guests' detached records), newest first.
    pub async fn list_all(&self, filter: &ResultFilter) -> Result<Vec<TestResultRecord>, StorageError> {
        match self {
            ResultStore::Memory(store) => Ok(store.list_all(filter).await),
            ResultStore::S3(store) => store.list_all(filter).await,
        }
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<TestResultRecord, StorageError> {
        match self {
            ResultStore::Memory(store) => store.get_by_id(id).await,
            ResultStore::S3(store) => store.get_by_id(id).await,
        }
    }

    /// Clear the owner of every record belonging to `user_id`, as when the
    /// account is removed. Returns how many records changed.
    pub async fn detach_user(&self, user_id: &str) -> Result<usize, StorageError> {
        let detached = match self {
            ResultStore::Memory(store) => store.detach_user(user_id).await,
            ResultStore::S3(store) => store.detach_user(user_id).await?,
        };
        tracing::info!(user = user_id, detached, "detached results from user");
        Ok(detached)
    }
}
