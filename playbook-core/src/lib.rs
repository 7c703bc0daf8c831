//! `Playbook` Core — shared types for playbook page generation
//!
//! Post metadata, the restricted object-literal parser used to read it out of
//! content sources, and the derived generation config consumed by the
//! renderer.

pub mod derive;
pub mod error;
pub mod extract;
pub mod literal;
pub mod metadata;
pub mod text;

pub use derive::{GenerationConfig, derive, derive_keywords};
pub use error::{MetadataError, Severity, ValidationIssue};
pub use extract::{LiteralSpan, extract_metadata, extract_raw, find_literal, has_marker};
pub use metadata::PostMetadata;
