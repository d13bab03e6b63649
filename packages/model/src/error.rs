use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a model document
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
