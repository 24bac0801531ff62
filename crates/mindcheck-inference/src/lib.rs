//! mindcheck-inference
//!
//! Disorder classification. The model artifacts are produced elsewhere; this
//! crate loads them once and answers single, synchronous predictions.

pub mod adapter;
pub mod dense;
pub mod error;
pub mod labels;

use mindcheck_core::models::features::FeatureVector;

use error::InferenceError;

/// Anything that can map a questionnaire feature vector to a disorder label.
///
/// Implementations must be deterministic and safe to share across request
/// handlers; they are never mutated after construction.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError>;
}
