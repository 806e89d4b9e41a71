//! Error type definitions

use thiserror::Error;

/// Fixed message shown to the user for any failed diagnosis attempt.
/// The underlying failure detail is logged, never rendered.
pub const ANALYSIS_ERROR_MESSAGE: &str =
    "The Oracle encountered an issue during analysis. Please try again with a clearer photo.";

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("File read error: {0}")]
    FileRead(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
