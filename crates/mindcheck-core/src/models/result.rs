use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::features::FeatureVector;
use super::prediction::PredictionResult;
use super::user::{GUEST, UserRef};
use crate::error::CoreError;

/// Identifier of a persisted test result.
///
/// UUIDv7: time-ordered, and monotonic for ids generated in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One questionnaire submission and the prediction it produced.
///
/// Created once, never edited. The only later change is clearing `user`
/// when the owning account is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestResultRecord {
    pub id: RecordId,
    pub user: Option<UserRef>,
    pub predicted_disorder: String,
    pub description: String,
    pub suggestions: Vec<String>,
    pub video_url: String,
    pub answers: FeatureVector,
    pub created_at: jiff::Timestamp,
}

impl TestResultRecord {
    /// Build a fresh record stamped with a new id and the current time.
    pub fn new(user: Option<UserRef>, prediction: &PredictionResult, answers: FeatureVector) -> Self {
        Self {
            id: RecordId::generate(),
            user,
            predicted_disorder: prediction.predicted_disorder.clone(),
            description: prediction.description.clone(),
            suggestions: prediction.suggestions.clone(),
            video_url: prediction.video.clone(),
            answers,
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Username of the owner, or `"Guest"` when there is none.
    pub fn owner_name(&self) -> &str {
        self.user.as_ref().map_or(GUEST, |u| u.username.as_str())
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.id == user_id)
    }
}

/// Narrowing applied to the all-results listing. Empty fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultFilter {
    /// Case-insensitive substring of the owner's username.
    pub username: Option<String>,
    /// Case-insensitive substring of the predicted label.
    pub label: Option<String>,
    /// Only records created at or after this instant.
    pub since: Option<jiff::Timestamp>,
}

impl ResultFilter {
    pub fn matches(&self, record: &TestResultRecord) -> bool {
        if let Some(since) = self.since
            && record.created_at < since
        {
            return false;
        }
        if let Some(label) = &self.label
            && !contains_ignore_case(&record.predicted_disorder, label)
        {
            return false;
        }
        match &self.username {
            Some(name) => record
                .user
                .as_ref()
                .is_some_and(|u| contains_ignore_case(&u.username, name)),
            None => true,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Newest first; equal timestamps fall back to id order, which is also
/// creation order.
pub fn newest_first(records: &mut [TestResultRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
