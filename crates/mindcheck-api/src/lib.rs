//! mindcheck-api
//!
//! HTTP surface of the MindCheck screening service: questionnaire submission,
//! prediction, per-user result history, and a staff view over all results.

pub mod config;
pub mod error;
pub mod middleware;
pub mod mint;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Everything except /health resolves the caller first.
    let api = Router::new()
        .route("/questionnaire", get(routes::questionnaire::get_questionnaire))
        .route("/submit", post(routes::submit::submit))
        .route("/results", get(routes::results::list_results))
        .route("/results/{id}", get(routes::results::get_result))
        .route("/admin/results", get(routes::results::list_all_results))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::identify_caller,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(api)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
