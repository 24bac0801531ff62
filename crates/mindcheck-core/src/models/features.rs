use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of questionnaire answers (and model input features).
pub const FEATURE_COUNT: usize = 28;

/// The numeric encoding of a questionnaire response, as fed to the model.
///
/// Element 0 is the respondent's age. Elements 1–27 are yes/no indicators
/// encoded as `0.0` or `1.0`. Serialized as a plain array of 28 numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build a vector from an age and the 27 indicator answers.
    pub fn from_answers(age: f64, indicators: [bool; FEATURE_COUNT - 1]) -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = age;
        for (slot, on) in values[1..].iter_mut().zip(indicators) {
            *slot = if on { 1.0 } else { 0.0 };
        }
        Self(values)
    }

    pub fn age(&self) -> f64 {
        self.0[0]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Single-precision copy for tensor construction.
    pub fn to_f32(&self) -> Vec<f32> {
        self.0.iter().map(|v| *v as f32).collect()
    }
}
