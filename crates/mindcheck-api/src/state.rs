use std::sync::Arc;

use mindcheck_auth::jwt::TokenKeys;
use mindcheck_inference::adapter::InferenceAdapter;
use mindcheck_storage::ResultStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Built once at startup; nothing in here is mutated by request handling
/// apart from the result store's own interior state.
#[derive(Clone)]
pub struct AppState {
    pub model: InferenceAdapter,
    pub results: Arc<ResultStore>,
    pub token_keys: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(model: InferenceAdapter, results: Arc<ResultStore>, token_keys: TokenKeys) -> Self {
        Self {
            model,
            results,
            token_keys: Arc::new(token_keys),
        }
    }
}
