//! `expand`: rewrite every post under the content directory.

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::cli::args::{ExpandArgs, OutputFormat};
use crate::error::PlaybookError;
use crate::runner::{RunSummary, Runner};
use crate::settings::Settings;

/// Run the batch and print the rewrite count.
///
/// # Errors
///
/// Returns a settings error for a bad settings file, an I/O error if
/// discovery or a write fails, or [`PlaybookError::Interrupted`] when
/// cancelled.
pub async fn run(args: &ExpandArgs, cancel: CancellationToken) -> Result<(), PlaybookError> {
    let settings = Settings::load(args.source.config.as_deref())?
        .with_overrides(args.source.content_dir.clone(), args.assets_dir.clone());
    let runner = Runner::new(settings, args.dry_run, cancel);

    // File I/O is blocking; keep it off the runtime's worker threads.
    let summary = tokio::task::spawn_blocking(move || runner.run())
        .await
        .map_err(std::io::Error::other)??;

    print_summary(&summary, args.dry_run, args.format);
    Ok(())
}

fn print_summary(summary: &RunSummary, dry_run: bool, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if dry_run {
                println!("Would rewrite {} files", summary.rewritten);
            } else {
                println!("Rewrote {} files", summary.rewritten);
            }
        }
        OutputFormat::Json => {
            println!("{}", json!({ "dryRun": dry_run, "summary": summary }));
        }
    }
}
