use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use mindcheck_auth::caller;

use crate::error::ApiError;
use crate::state::AppState;

/// Caller resolution middleware.
///
/// Reads the `Authorization` header and inserts a [`caller::Caller`] into
/// request extensions. Requests without the header continue as guests;
/// requests with an unusable token are rejected with 401.
pub async fn identify_caller(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| ApiError::from(mindcheck_auth::error::AuthError::MalformedHeader))?,
        ),
        None => None,
    };

    let caller = caller::identify(header, &state.token_keys)?;
    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}
