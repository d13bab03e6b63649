use modelgen_model::ModelError;
use thiserror::Error;

/// Errors raised by the host side of generation: loading models, dispatching
/// generators and persisting their output
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown generator '{0}'")]
    UnknownGenerator(String),

    #[error("Generator '{0}' is already registered")]
    DuplicateGenerator(String),

    #[error("Invalid output path '{0}': must be relative and stay inside the output root")]
    InvalidOutputPath(String),
}
