//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No session cookie has been stored yet
    #[error("No session cookie found at {}; store one with `aoc cookie <value>`", .0.display())]
    MissingCookie(PathBuf),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Empty answer given to submit
    #[error("Can't submit an empty answer!")]
    EmptyAnswer,

    /// Offline submission would overwrite a stored answer
    #[error("Answer file {} already exists!", .0.display())]
    AnswerExists(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),

    /// Status requested for a year with nothing stored
    #[error("No artifacts stored for year {year} (looked in {})", .dir.display())]
    MissingYear { year: u16, dir: PathBuf },
}
