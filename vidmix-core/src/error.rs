use std::fmt;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vidmix
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("External dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, String),

    #[error("{tool} failed ({status}): {stderr}")]
    CommandFailed {
        tool: String,
        /// Formatted exit status, or "unknown" when it could not be collected.
        status: String,
        stderr: String,
    },

    #[error("ffprobe parse error: {0}")]
    FfprobeParse(String),

    #[error("Nothing to mix: {0}")]
    NoSources(String),

    #[error("Invalid path: {0}")]
    PathError(String),
}

/// Result type for vidmix operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a tool that could not be spawned.
pub fn command_start_error(tool: impl Into<String>, err: impl fmt::Display) -> CoreError {
    CoreError::CommandStart(tool.into(), err.to_string())
}

/// Builds a `CommandFailed` error carrying the tool's exit status and stderr.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.into(),
        status: status.to_string(),
        stderr: stderr.into(),
    }
}

/// Builds an error for a tool whose exit status could not be collected.
pub fn command_wait_error(tool: impl Into<String>, err: impl fmt::Display) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.into(),
        status: "unknown".to_string(),
        stderr: format!("failed to wait for process: {err}"),
    }
}
