use thiserror::Error;
use uuid::Uuid;

use crate::classifier::TableError;

#[derive(Debug, Error)]
pub enum FeiraError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Process not registered: {0}")]
    UnknownProcess(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),

    #[error("Rule table error: {0}")]
    Table(#[from] TableError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
