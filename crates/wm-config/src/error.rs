use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sync depth error: {0}")]
    SyncDepth(#[from] wm_sync::SyncDepthError),

    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("json encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
