use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Missing field `{field}` in record: {record}")]
    MissingField { field: String, record: String },
    #[error("Invalid codename {codename:?}: {reason}")]
    InvalidCodename { codename: String, reason: String },
    #[error("Invalid table entry on line {line}: {reason}")]
    InvalidTable { line: usize, reason: String },
    #[error("Expected a JSON {expected} in {path}")]
    UnexpectedShape { expected: &'static str, path: PathBuf },
    #[error("{path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AtlasError {
    /// Attach the offending path to an I/O error.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, AtlasError>;
