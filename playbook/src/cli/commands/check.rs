//! `check`: lint post metadata without writing.

use std::path::{Path, PathBuf};

use serde::Serialize;

use playbook_core::metadata::lint_metadata;
use playbook_core::{PostMetadata, Severity, ValidationIssue, extract_raw, has_marker};
use playbook_render::page::is_generated;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::discovery::{discover, read_source};
use crate::error::PlaybookError;
use crate::settings::Settings;

/// Lint findings for one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Source path.
    pub path: PathBuf,
    /// Findings, empty when clean.
    pub issues: Vec<IssueReport>,
}

/// Serializable form of a [`ValidationIssue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueReport {
    /// `error` or `warning`.
    pub severity: &'static str,
    /// Metadata field the finding refers to.
    pub field: String,
    /// Description.
    pub message: String,
}

impl From<&ValidationIssue> for IssueReport {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            severity: match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            },
            field: issue.field.clone(),
            message: issue.message.clone(),
        }
    }
}

impl FileReport {
    fn fails(&self, strict: bool) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == "error" || (strict && i.severity == "warning"))
    }
}

/// Lint every unexpanded post under the content directory.
///
/// # Errors
///
/// Returns [`PlaybookError::ValidationFailed`] if any post has errors (or
/// warnings, with `--strict`), plus the settings and I/O errors of
/// discovery.
pub fn run(args: &CheckArgs) -> Result<(), PlaybookError> {
    let settings = Settings::load(args.source.config.as_deref())?
        .with_overrides(args.source.content_dir.clone(), None);
    let files = discover(&settings.content_dir, &settings.include_patterns()?)?;

    let mut reports = Vec::new();
    for path in &files {
        let source = read_source(path)?;
        if let Some(report) = check_source(path, &source) {
            reports.push(report);
        }
    }

    let failed = reports.iter().filter(|r| r.fails(args.strict)).count();
    let checked = reports.len();

    match args.format {
        OutputFormat::Human => print_human(&reports, checked, failed),
        OutputFormat::Json => {
            let body = serde_json::json!({
                "files": reports,
                "summary": { "checked": checked, "failed": failed, "strict": args.strict },
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    if failed > 0 {
        return Err(PlaybookError::ValidationFailed { failed, checked });
    }
    Ok(())
}

/// Lint one source. `None` for files that are not unexpanded posts.
#[must_use]
pub fn check_source(path: &Path, source: &str) -> Option<FileReport> {
    if is_generated(source) || !has_marker(source) {
        return None;
    }

    let issues = match extract_raw(source) {
        Ok(None) => vec![error_issue("meta", "metadata literal never closes")],
        Err(err) => vec![error_issue("meta", &err.to_string())],
        Ok(Some(raw)) => match PostMetadata::from_value(raw.clone()) {
            Ok(meta) => lint_metadata(&meta, &raw)
                .iter()
                .map(IssueReport::from)
                .collect(),
            Err(err) => vec![error_issue("meta", &err.to_string())],
        },
    };

    Some(FileReport {
        path: path.to_path_buf(),
        issues,
    })
}

fn error_issue(field: &str, message: &str) -> IssueReport {
    IssueReport {
        severity: "error",
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn print_human(reports: &[FileReport], checked: usize, failed: usize) {
    for report in reports.iter().filter(|r| !r.issues.is_empty()) {
        println!("{}", report.path.display());
        for issue in &report.issues {
            println!("  {}: {} at {}", issue.severity, issue.message, issue.field);
        }
    }
    println!("Checked {checked} posts, {failed} failed");
}
