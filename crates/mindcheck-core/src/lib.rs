//! mindcheck-core
//!
//! Pure domain types and S3 key conventions.
//! No AWS SDK or ML runtime dependency. This is the shared vocabulary of the
//! MindCheck service.

pub mod error;
pub mod models;
pub mod s3_keys;
