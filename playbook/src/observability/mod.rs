//! Observability for `playbook` runs.
//!
//! Structured logging via `tracing`; per-file progress is emitted as log
//! events, the final count on stdout.

pub mod logging;

pub use logging::{LOG_LEVEL_ENV, LogFormat, init_logging};
