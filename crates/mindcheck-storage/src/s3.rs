use aws_sdk_s3::Client;

use mindcheck_core::models::result::{RecordId, ResultFilter, TestResultRecord, newest_first};
use mindcheck_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

/// Result log kept in an S3 bucket.
///
/// Each record is its own object; a user's history is found through empty
/// marker objects under `users/{id}/results/`.
#[derive(Debug, Clone)]
pub struct S3Results {
    client: Client,
    bucket: String,
}

impl S3Results {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Write the record, then its owner marker.
    pub async fn insert(&self, record: &TestResultRecord) -> Result<(), StorageError> {
        self.save(record).await?;
        if let Some(user) = &record.user {
            let marker = s3_keys::user_result_marker(&user.id, record.id);
            objects::put_object(&self.client, &self.bucket, &marker, Vec::new(), None).await?;
        }
        Ok(())
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<TestResultRecord>, StorageError> {
        let mut found = Vec::new();
        for (_, record) in self.owned_records(user_id).await? {
            found.push(record);
        }
        newest_first(&mut found);
        Ok(found)
    }

    /// Every record in the bucket that passes `filter`. Reads each record
    /// object, so cost grows with the size of the log.
    pub async fn list_all(&self, filter: &ResultFilter) -> Result<Vec<TestResultRecord>, StorageError> {
        let keys = objects::list_objects(&self.client, &self.bucket, s3_keys::RESULTS_PREFIX).await?;

        let mut found = Vec::new();
        for key in keys {
            let body = match objects::get_object(&self.client, &self.bucket, &key).await {
                Ok(body) => body,
                Err(StorageError::NotFound { .. }) => continue,
                Err(e) => return Err(e),
            };
            let record: TestResultRecord = serde_json::from_slice(&body)?;
            if filter.matches(&record) {
                found.push(record);
            }
        }
        newest_first(&mut found);
        Ok(found)
    }

    pub async fn get_by_id(&self, id: RecordId) -> Result<TestResultRecord, StorageError> {
        let body = objects::get_object(&self.client, &self.bucket, &s3_keys::result(id)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn detach_user(&self, user_id: &str) -> Result<usize, StorageError> {
        let mut detached = 0;
        for (marker, mut record) in self.owned_records(user_id).await? {
            record.user = None;
            self.save(&record).await?;
            objects::delete_object(&self.client, &self.bucket, &marker).await?;
            detached += 1;
        }
        Ok(detached)
    }

    async fn save(&self, record: &TestResultRecord) -> Result<(), StorageError> {
        let body = serde_json::to_vec(record)?;
        objects::put_object(
            &self.client,
            &self.bucket,
            &s3_keys::result(record.id),
            body,
            Some("application/json"),
        )
        .await
    }

    /// Records reachable from the user's markers that still name that user,
    /// paired with the marker key. Dangling markers are skipped.
    async fn owned_records(
        &self,
        user_id: &str,
    ) -> Result<Vec<(String, TestResultRecord)>, StorageError> {
        let prefix = s3_keys::user_results_prefix(user_id);
        let markers = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut owned = Vec::new();
        for marker in markers {
            let Some(id) = s3_keys::record_id_from_marker(&marker) else {
                tracing::warn!(key = %marker, "ignoring malformed result marker");
                continue;
            };
            match self.get_by_id(id).await {
                Ok(record) if record.is_owned_by(user_id) => owned.push((marker, record)),
                Ok(_) => {}
                Err(StorageError::NotFound { key }) => {
                    tracing::warn!(marker = %marker, key = %key, "result marker points at a missing record");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(owned)
    }
}
