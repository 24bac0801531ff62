use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What a client receives after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub predicted_disorder: String,
    pub description: String,
    pub suggestions: Vec<String>,
    /// Video URL; empty when the label has no catalog entry.
    pub video: String,
}
