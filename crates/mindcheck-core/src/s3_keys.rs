//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the MindCheck S3 bucket.

use crate::models::result::RecordId;

pub const RESULTS_PREFIX: &str = "results/";

pub fn result(id: RecordId) -> String {
    format!("{RESULTS_PREFIX}{id}.json")
}

/// Prefix under which a user's result markers live.
pub fn user_results_prefix(user_id: &str) -> String {
    format!("users/{user_id}/results/")
}

/// Empty marker object linking a user to one of their results.
pub fn user_result_marker(user_id: &str, id: RecordId) -> String {
    format!("users/{user_id}/results/{id}")
}

/// Recover the record id from a marker key produced by [`user_result_marker`].
pub fn record_id_from_marker(key: &str) -> Option<RecordId> {
    key.rsplit('/').next()?.parse().ok()
}
