use thiserror::Error;

/// Loader errors.  The parsing/evaluation core itself is total and has no
/// error type — only the I/O surface can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("record parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
