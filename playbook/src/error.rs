//! Error types for the `playbook` CLI.
//!
//! Every failure surfaces as a [`PlaybookError`], which maps to one of the
//! process exit codes in [`ExitCode`].

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `playbook` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error (failed lint)
    pub const ERROR: i32 = 1;

    /// Settings error (invalid YAML, bad include pattern)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (missing content directory, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `playbook` operations.
#[derive(Debug, Error)]
pub enum PlaybookError {
    /// Settings loading or validation error
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The batch was cancelled by a signal
    #[error("interrupted after {completed} of {total} files")]
    Interrupted {
        /// Files fully processed before the signal
        completed: usize,
        /// Files discovered
        total: usize,
    },

    /// `check` found problems
    #[error("{failed} of {checked} posts failed metadata checks")]
    ValidationFailed {
        /// Posts with at least one failing issue
        failed: usize,
        /// Posts inspected
        checked: usize,
    },

    /// Invalid command-line usage
    #[error("usage: {0}")]
    Usage(String),
}

impl PlaybookError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Settings(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::ValidationFailed { .. } => ExitCode::ERROR,
            Self::Interrupted { .. } => ExitCode::INTERRUPTED,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Settings Errors
// ============================================================================

/// Settings file loading and validation errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the settings file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Settings file not found
    #[error("settings file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// An include glob does not compile
    #[error("invalid include pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Error message from the glob compiler
        message: String,
    },

    /// A field has an unusable value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Name of the field
        field: String,
        /// What is wrong with it
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_settings_error_exit_code() {
        let err: PlaybookError = SettingsError::MissingFile {
            path: PathBuf::from("/playbook.yaml"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: PlaybookError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_malformed_yaml_is_settings_error() {
        let err: PlaybookError = Settings::from_yaml("include: [", std::path::Path::new("playbook.yaml"))
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            PlaybookError::Settings(SettingsError::ParseError { .. })
        ));
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_interrupted_exit_code() {
        let err = PlaybookError::Interrupted {
            completed: 2,
            total: 5,
        };
        assert_eq!(err.exit_code(), ExitCode::INTERRUPTED);
        assert_eq!(err.to_string(), "interrupted after 2 of 5 files");
    }

    #[test]
    fn test_validation_failed_display() {
        let err = PlaybookError::ValidationFailed {
            failed: 1,
            checked: 4,
        };
        assert_eq!(err.exit_code(), ExitCode::ERROR);
        assert_eq!(err.to_string(), "1 of 4 posts failed metadata checks");
    }

    #[test]
    fn test_usage_exit_code() {
        let err = PlaybookError::Usage("--topic must not be empty".to_string());
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
    }
}
