use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Serialize;

use mindcheck_auth::caller::Caller;
use mindcheck_core::models::result::{RecordId, ResultFilter, TestResultRecord};
use mindcheck_core::models::user::UserRef;

use crate::error::{ApiError, NOT_AUTHENTICATED, PERMISSION_DENIED, RESULT_NOT_FOUND};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ResultList {
    pub results: Vec<TestResultRecord>,
}

/// A single record with its owner's display name resolved.
#[derive(Serialize)]
pub struct ResultDetail {
    #[serde(flatten)]
    pub record: TestResultRecord,
    pub owner: String,
}

fn require_user(caller: &Caller) -> Result<&UserRef, ApiError> {
    caller
        .user()
        .ok_or_else(|| ApiError::Unauthorized(NOT_AUTHENTICATED.to_string()))
}

/// The caller's own results, newest first.
pub async fn list_results(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<ResultList>, ApiError> {
    let user = require_user(&caller)?;
    let results = state.results.list_by_user(&user.id).await?;
    Ok(Json(ResultList { results }))
}

/// One result by id. Owners see their own records; staff see any record.
/// Anything else is reported as not found.
pub async fn get_result(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> Result<Json<ResultDetail>, ApiError> {
    let user = require_user(&caller)?;
    let not_found = || ApiError::NotFound(RESULT_NOT_FOUND.to_string());

    let id: RecordId = id.parse().map_err(|_| not_found())?;
    let record = state.results.get_by_id(id).await?;

    if !caller.is_staff() && !record.is_owned_by(&user.id) {
        return Err(not_found());
    }

    let owner = record.owner_name().to_string();
    Ok(Json(ResultDetail { record, owner }))
}

/// Every stored result, for staff. Supports `username`, `label` and `since`
/// query parameters.
pub async fn list_all_results(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    query: Result<Query<ResultFilter>, QueryRejection>,
) -> Result<Json<ResultList>, ApiError> {
    let user = require_user(&caller)?;
    if !caller.is_staff() {
        tracing::warn!(user = %user.id, "non-staff caller asked for all results");
        return Err(ApiError::Forbidden(PERMISSION_DENIED.to_string()));
    }

    let Query(filter) = query?;
    let results = state.results.list_all(&filter).await?;
    Ok(Json(ResultList { results }))
}
