//! Error types for `Playbook` page rendering.

use playbook_core::MetadataError;
use thiserror::Error;

/// Errors that can occur while expanding a source file.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The metadata literal was found but could not be evaluated.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Serializing the page data literal failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
