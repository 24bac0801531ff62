use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mindcheck_api::config::{ServiceConfig, StorageBackend};
use mindcheck_api::state::AppState;
use mindcheck_auth::jwt::TokenKeys;
use mindcheck_inference::adapter::InferenceAdapter;
use mindcheck_storage::ResultStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;

    // A missing model does not stop the service; predictions report it instead.
    let model = InferenceAdapter::load(&config.model_dir);

    let results = match &config.storage {
        StorageBackend::Memory => {
            tracing::warn!("results are kept in memory and will be lost on restart");
            ResultStore::memory()
        }
        StorageBackend::S3 { bucket } => {
            let s3 = mindcheck_storage::client::build_client().await;
            tracing::info!(bucket = %bucket, "storing results in S3");
            ResultStore::s3(s3, bucket.clone())
        }
    };

    let state = AppState::new(
        model,
        Arc::new(results),
        TokenKeys::from_secret(config.token_secret.as_bytes()),
    );
    let app = mindcheck_api::app(state);

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
