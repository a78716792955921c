//! Error types for the bootstrap pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type for bootstrap operations
pub type SetupResult<T> = Result<T, SetupError>;

/// Errors that can occur while fetching the bundle or configuring the
/// workspace. Every variant is fatal; the CLI prints it and exits 1.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Transport failure or non-success HTTP status during download
    #[error("Failed to download {url}: {message}")]
    Network { url: String, message: String },

    /// Malformed or unreadable archive data
    #[error("Failed to extract bundle: {0}")]
    Extraction(#[from] zip::result::ZipError),

    /// The extracted bundle has no entry script to run
    #[error("Bundle is missing its entry script: {}", .0.display())]
    EntryScriptMissing(PathBuf),

    /// The editor CLI could not be invoked
    #[error("Visual Studio Code is not installed or `code` is not on PATH")]
    EditorMissing,

    /// The invoking executable matched none of the known runtimes
    #[error("Unsupported runtime '{0}'. Run with Node.js, Bun, or Deno")]
    UnsupportedRuntime(String),

    /// A mandatory child process failed to spawn or exited non-zero
    #[error("Command failed: {command} ({reason})")]
    CommandFailure { command: String, reason: String },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialize error
    #[error("JSON error in {}: {message}", .path.display())]
    Json { path: PathBuf, message: String },
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            path: PathBuf::new(),
            message: err.to_string(),
        }
    }
}
