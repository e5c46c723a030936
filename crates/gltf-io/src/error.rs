// Loader error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GltfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid field `{field}`: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid glTF: {0}")]
    InvalidDocument(String),

    #[error("Invalid GLB: {0}")]
    InvalidContainer(String),

    #[error("Unsupported file extension `{0}`")]
    UnsupportedExtension(String),
}

pub type Result<T> = std::result::Result<T, GltfError>;
