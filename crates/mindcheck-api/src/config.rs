use std::net::SocketAddr;
use std::path::PathBuf;

/// Where test results are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-process only; lost on restart.
    Memory,
    S3 { bucket: String },
}

/// Service settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub model_dir: PathBuf,
    pub storage: StorageBackend,
    pub token_secret: String,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda: bool,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MODEL_DIR: &str = "ml_models";
const DEFAULT_BUCKET: &str = "mindcheck";

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("MINDCHECK_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid MINDCHECK_BIND_ADDR {bind_addr:?}: {e}"))?;

        let model_dir = PathBuf::from(
            lookup("MINDCHECK_MODEL_DIR").unwrap_or_else(|| DEFAULT_MODEL_DIR.to_string()),
        );

        let storage = match lookup("MINDCHECK_STORAGE").as_deref() {
            None | Some("memory") => StorageBackend::Memory,
            Some("s3") => StorageBackend::S3 {
                bucket: lookup("MINDCHECK_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            },
            Some(other) => {
                return Err(eyre::eyre!(
                    "unknown MINDCHECK_STORAGE {other:?} (expected \"memory\" or \"s3\")"
                ));
            }
        };

        let token_secret = lookup("MINDCHECK_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| eyre::eyre!("MINDCHECK_TOKEN_SECRET must be set"))?;

        Ok(Self {
            bind_addr,
            model_dir,
            storage,
            token_secret,
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
