use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::items::{AGE_KEY_ALIAS, FEATURE_NAMES};

/// A single raw answer as it arrives in a request body.
///
/// Clients send strings (`"yes"`, `"30"`), booleans, or numbers
/// interchangeably; the variant is decided here and the validator works on
/// the tag rather than on untyped JSON. Arrays and objects land in `Other`
/// so they fail validation at their position instead of failing the whole
/// body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Null,
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl AnswerValue {
    /// Lowercased token used to match yes/no style answers.
    pub fn token(&self) -> String {
        match self {
            AnswerValue::Null => "none".to_string(),
            AnswerValue::Flag(b) => b.to_string(),
            AnswerValue::Number(n) => n.to_string(),
            AnswerValue::Text(s) => s.to_lowercase(),
            AnswerValue::Other(v) => v.to_string().to_lowercase(),
        }
    }

    /// Numeric reading used for the age answer. `None` when the value is not
    /// a finite number.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            AnswerValue::Number(n) => n.as_f64()?,
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok()?,
            AnswerValue::Null | AnswerValue::Flag(_) | AnswerValue::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

/// The `answers` field of a submission: either positional, or keyed by
/// feature name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerSheet {
    Ordered(Vec<AnswerValue>),
    Named(BTreeMap<String, AnswerValue>),
}

impl AnswerSheet {
    /// Put the answers in questionnaire order.
    ///
    /// Positional sheets are returned as-is (length is checked by the
    /// validator). Named sheets must contain every feature name; unknown keys
    /// are ignored. The age may also arrive under [`AGE_KEY_ALIAS`].
    pub fn into_ordered(self) -> Result<Vec<AnswerValue>, ValidationError> {
        match self {
            AnswerSheet::Ordered(values) => Ok(values),
            AnswerSheet::Named(mut map) => {
                if !map.contains_key(FEATURE_NAMES[0])
                    && let Some(age) = map.remove(AGE_KEY_ALIAS)
                {
                    map.insert(FEATURE_NAMES[0].to_string(), age);
                }
                let missing: Vec<String> = FEATURE_NAMES
                    .iter()
                    .filter(|name| !map.contains_key(**name))
                    .map(|name| name.to_string())
                    .collect();
                if !missing.is_empty() {
                    return Err(ValidationError::MissingFeatures(missing));
                }
                Ok(FEATURE_NAMES
                    .iter()
                    .filter_map(|name| map.remove(*name))
                    .collect())
            }
        }
    }
}
