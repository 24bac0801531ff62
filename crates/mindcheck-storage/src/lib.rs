//! mindcheck-storage
//!
//! Persistence of test results. An S3 backend built on a thin wrapper around
//! the AWS S3 SDK, and an in-process backend for local runs and tests.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod results;
pub mod s3;

pub use results::ResultStore;
