//! Core error types for `Playbook`
//!
//! Metadata parsing errors and lint issues shared across the workspace.

use thiserror::Error;

// ============================================================================
// Metadata Errors
// ============================================================================

/// Failures while evaluating an embedded metadata literal.
///
/// A missing `export const meta` marker or an unbalanced literal is not an
/// error: the extractor reports those as `Ok(None)` so the file is skipped
/// quietly. Everything here means the literal was found but could not be
/// turned into [`PostMetadata`](crate::PostMetadata).
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The literal text could not be parsed.
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line within the literal
        line: usize,
        /// 1-based column within the literal
        column: usize,
        /// What the parser expected
        message: String,
    },

    /// A bare identifier appeared where only data is allowed.
    #[error("unresolvable reference `{name}` at line {line}, column {column}")]
    UnresolvedReference {
        /// The identifier as written
        name: String,
        /// 1-based line within the literal
        line: usize,
        /// 1-based column within the literal
        column: usize,
    },

    /// The literal parsed but does not describe a post.
    #[error("invalid metadata: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for MetadataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Invalid(err.to_string())
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single lint finding for a post's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Metadata field the issue refers to (e.g. "meta.date")
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.field)
    }
}

/// Severity level for lint findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The post cannot be expanded as written
    Error,
    /// Expansion works, but the output will likely be worse than intended
    Warning,
}
