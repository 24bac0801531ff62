use mindcheck_core::models::features::{FEATURE_COUNT, FeatureVector};

use crate::answer::AnswerValue;
use crate::error::{AgeProblem, ValidationError};
use crate::items::{AGE_MAX, AGE_MIN};

const TRUTHY: [&str; 3] = ["yes", "true", "1"];
const FALSY: [&str; 3] = ["no", "false", "0"];

/// Validate a questionnaire response and encode it for the model.
///
/// Strict policy: the age must be a finite number within 0–100 and every
/// indicator must be one of yes/no/true/false/1/0 (case-insensitive).
/// The first offending answer is reported.
pub fn validate(raw: &[AnswerValue]) -> Result<FeatureVector, ValidationError> {
    if raw.len() != FEATURE_COUNT {
        return Err(ValidationError::WrongLength { actual: raw.len() });
    }

    let age = parse_age(&raw[0])?;

    let mut indicators = [false; FEATURE_COUNT - 1];
    for (offset, value) in raw[1..].iter().enumerate() {
        indicators[offset] = parse_indicator(value).ok_or(ValidationError::InvalidAnswer {
            index: offset + 1,
        })?;
    }

    Ok(FeatureVector::from_answers(age, indicators))
}

fn parse_age(value: &AnswerValue) -> Result<f64, AgeProblem> {
    let age = value.as_number().ok_or(AgeProblem::NotNumeric)?;
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(AgeProblem::OutOfRange);
    }
    Ok(age)
}

fn parse_indicator(value: &AnswerValue) -> Option<bool> {
    let token = value.token();
    if TRUTHY.contains(&token.as_str()) {
        Some(true)
    } else if FALSY.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}
