//! `Playbook` Render — page generation from post metadata
//!
//! Expands a post's metadata into templated sections, a deterministic hero
//! illustration, and a rewritten page source. Everything here is pure: file
//! I/O belongs to the caller.

pub mod error;
pub mod escape;
pub mod hero;
pub mod page;
pub mod sections;
pub mod transform;

pub use error::RenderError;
pub use transform::{Expansion, Outcome, SkipReason, expand_source};
