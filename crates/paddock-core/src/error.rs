use thiserror::Error;

/// Application-wide error types for Paddock.
///
/// Every variant is fatal: a run stops at the first error it meets.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (bad URL, non-success status, unreadable body).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Expected markup is missing or has the wrong shape.
    #[error("Structure error: {0}")]
    StructureError(String),

    /// A cell or attribute holds a value that does not parse.
    #[error("Value error: {0}")]
    ValueError(String),

    /// Car kind attribute outside `electric` / `combustion` / `other`.
    #[error("Unknown car kind: {0:?}")]
    UnknownCarKind(String),

    /// Event description matched none of the known event kinds.
    #[error("Unknown event kind: {0:?}")]
    UnknownEventKind(String),

    /// Writing result files failed.
    #[error("Output error: {0}")]
    OutputError(String),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Coarse failure class used when reporting an aborted run.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::HttpError(_) | AppError::Timeout(_) | AppError::NetworkError(_) => {
                "transport"
            }
            AppError::StructureError(_) => "structure",
            AppError::ValueError(_)
            | AppError::UnknownCarKind(_)
            | AppError::UnknownEventKind(_) => "value",
            AppError::OutputError(_) => "output",
            AppError::ConfigError(_) => "config",
        }
    }
}
