//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod completions;
pub mod expand;
pub mod hero;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands};
use crate::error::PlaybookError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// `cancel` is triggered by the signal handler; only `expand` observes it.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), PlaybookError> {
    match cli.command {
        Commands::Expand(args) => expand::run(&args, cancel).await,
        Commands::Check(args) => check::run(&args),
        Commands::Hero(args) => hero::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
