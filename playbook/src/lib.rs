//! `Playbook` — expand marketing post stubs into full playbook pages
//!
//! The library side of the `playbook` binary: settings, content discovery,
//! the batch runner, and the CLI command handlers. The page transform
//! itself lives in `playbook-render`.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod observability;
pub mod runner;
pub mod settings;
