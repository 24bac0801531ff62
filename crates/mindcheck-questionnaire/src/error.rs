use thiserror::Error;

use mindcheck_core::models::features::FEATURE_COUNT;

/// Why a questionnaire response was rejected.
///
/// The `Display` text of each variant is shown to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} answers are required", FEATURE_COUNT)]
    WrongLength { actual: usize },

    #[error("{0}")]
    InvalidAge(#[from] AgeProblem),

    /// `index` is zero-based; the message reports a one-based position.
    #[error("Invalid answer at position {}", .index + 1)]
    InvalidAnswer { index: usize },

    #[error("Missing features: {}", .0.join(", "))]
    MissingFeatures(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeProblem {
    #[error("Age must be a numeric value.")]
    NotNumeric,

    #[error("Age must be between 0 and 100.")]
    OutOfRange,
}
