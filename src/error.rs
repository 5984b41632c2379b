// src/error.rs
// Standardized error types for everything-mcp

use thiserror::Error;

/// Errors produced while translating a request into an `es.exe` invocation
/// or running it. Display strings double as the user-facing tool-error text.
#[derive(Error, Debug)]
pub enum EsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The subprocess could not be started at all (missing executable,
    /// permission denied). Distinct from a bad exit code.
    #[error("Failed to execute es.exe: {0}")]
    Launch(#[source] std::io::Error),

    /// The subprocess ran but exited with a code outside {0, 1}.
    /// Exit code 1 means "no results" and is not an error.
    #[error("es.exe exited with code {code}: {stderr}")]
    Exit { code: i32, stderr: String },

    #[error("es.exe timed out after {secs}s")]
    Timeout { secs: u64 },
}

/// Convenience type alias for Result using EsError
pub type Result<T> = std::result::Result<T, EsError>;
