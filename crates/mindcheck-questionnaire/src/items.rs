use serde::Serialize;
use ts_rs::TS;

use mindcheck_core::models::features::FEATURE_COUNT;

/// Inclusive bounds accepted for the age answer.
pub const AGE_MIN: f64 = 0.0;
pub const AGE_MAX: f64 = 100.0;

/// Key older clients use for the age in named answer sheets.
pub const AGE_KEY_ALIAS: &str = "ag+1:629e";

/// Feature names in model input order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "feeling.nervous",
    "panic",
    "breathing.rapidly",
    "sweating",
    "trouble.in.concentration",
    "having.trouble.in.sleeping",
    "having.trouble.with.work",
    "hopelessness",
    "anger",
    "over.react",
    "change.in.eating",
    "suicidal.thought",
    "feeling.tired",
    "close.friend",
    "social.media.addiction",
    "weight.gain",
    "introvert",
    "popping.up.stressful.memory",
    "having.nightmares",
    "avoids.people.or.activities",
    "feeling.negative",
    "trouble.concentrating",
    "blamming.yourself",
    "hallucinations",
    "repetitive.behaviour",
    "seasonally",
    "increased.energy",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemKind {
    /// Numeric age in years, 0–100.
    Age,
    /// yes/no, true/false or 1/0.
    YesNo,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QuestionnaireItem {
    pub index: usize,
    pub name: String,
    pub kind: ItemKind,
}

/// All questionnaire items, in answer order.
pub fn all_items() -> Vec<QuestionnaireItem> {
    FEATURE_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| QuestionnaireItem {
            index,
            name: name.to_string(),
            kind: if index == 0 { ItemKind::Age } else { ItemKind::YesNo },
        })
        .collect()
}
