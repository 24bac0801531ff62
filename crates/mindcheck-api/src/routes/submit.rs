use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

use mindcheck_auth::caller::Caller;
use mindcheck_core::models::prediction::PredictionResult;
use mindcheck_questionnaire::{AnswerSheet, catalog, validate};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequest {
    /// Absent answers are treated as an empty sheet and fail the length check.
    #[serde(default)]
    pub answers: Option<AnswerSheet>,
}

/// Validate a questionnaire, run the model, and return the matching advice.
///
/// Authenticated callers also get the result appended to their history. A
/// failure to store it is logged and does not change the response.
pub async fn submit(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(request) = body?;

    let raw = match request.answers {
        Some(sheet) => sheet.into_ordered()?,
        None => Vec::new(),
    };
    let features = validate(&raw)?;

    let model = state.model.clone();
    let label = tokio::task::spawn_blocking(move || model.predict(&features))
        .await
        .map_err(|e| ApiError::Internal(format!("prediction task failed: {e}")))??;

    let result = catalog::predict_result(&label);

    if let Some(user) = caller.user()
        && let Err(e) = state.results.append(Some(user), &result, &features).await
    {
        tracing::error!(user = %user.id, error = %e, "failed to persist test result");
    }

    tracing::info!(
        predicted = %result.predicted_disorder,
        authenticated = caller.user().is_some(),
        "prediction served"
    );

    Ok(Json(result))
}
