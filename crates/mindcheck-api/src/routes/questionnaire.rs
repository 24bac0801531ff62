use axum::Json;
use serde::Serialize;

use mindcheck_questionnaire::items::{QuestionnaireItem, all_items};

#[derive(Serialize)]
pub struct Questionnaire {
    items: Vec<QuestionnaireItem>,
}

/// The questionnaire items in answer order. Public schema data.
pub async fn get_questionnaire() -> Json<Questionnaire> {
    Json(Questionnaire { items: all_items() })
}
