use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Decodes a class index into the label string the model was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, InferenceError> {
        if classes.is_empty() {
            return Err(InferenceError::Load("label set is empty".to_string()));
        }
        Ok(Self { classes })
    }

    /// Read a `{"classes": [...]}` file.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let encoder: LabelEncoder = serde_json::from_slice(&std::fs::read(path)?)?;
        Self::new(encoder.classes)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn decode(&self, index: usize) -> Result<&str, InferenceError> {
        self.classes.get(index).map(String::as_str).ok_or_else(|| {
            InferenceError::InferenceFailed(format!(
                "class index {index} outside label set of {}",
                self.classes.len()
            ))
        })
    }
}
