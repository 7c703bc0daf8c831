//! Sequential batch runner.
//!
//! Walks the content directory and expands each source in turn. Per-file
//! metadata problems are logged and skipped; I/O failures stop the batch.
//! Between files the runner checks a cancellation token so a signal stops
//! the run at a file boundary, never half-way through a write.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

use playbook_render::page::EmitOptions;
use playbook_render::{Expansion, Outcome, expand_source};

use crate::discovery::{discover, read_source};
use crate::error::PlaybookError;
use crate::settings::Settings;

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Files matched by discovery.
    pub discovered: usize,
    /// Files rewritten (or that would be, in a dry run).
    pub rewritten: usize,
    /// Files left untouched: no metadata export, unbalanced, or already expanded.
    pub skipped: usize,
    /// Files whose metadata could not be evaluated.
    pub failed: usize,
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileResult {
    Rewritten,
    Skipped,
    Failed,
}

/// Expands every discovered source under the configured content directory.
#[derive(Debug)]
pub struct Runner {
    settings: Settings,
    emit: EmitOptions,
    dry_run: bool,
    cancel: CancellationToken,
}

impl Runner {
    /// Create a runner. `cancel` is polled between files.
    #[must_use]
    pub fn new(settings: Settings, dry_run: bool, cancel: CancellationToken) -> Self {
        let emit = settings.emit_options();
        Self {
            settings,
            emit,
            dry_run,
            cancel,
        }
    }

    /// Process every discovered file, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybookError::Io`] on discovery, read or write failure,
    /// [`PlaybookError::Settings`] if the include globs do not compile, and
    /// [`PlaybookError::Interrupted`] if cancelled before all files ran.
    pub fn run(&self) -> Result<RunSummary, PlaybookError> {
        let include = self.settings.include_patterns()?;
        let files = discover(&self.settings.content_dir, &include)?;
        let mut summary = RunSummary {
            discovered: files.len(),
            ..RunSummary::default()
        };
        // asset name -> first source that claimed it
        let mut assets: HashMap<String, PathBuf> = HashMap::new();

        if let Some(expected) = self.settings.asset_import_mismatch() {
            tracing::warn!(
                assets_dir = %self.settings.assets_dir.display(),
                import_prefix = %self.settings.asset_import_prefix,
                expected = %expected.display(),
                "asset import prefix does not point at the assets directory"
            );
        }

        tracing::info!(
            content_dir = %self.settings.content_dir.display(),
            files = files.len(),
            dry_run = self.dry_run,
            "starting expansion"
        );

        for (index, path) in files.iter().enumerate() {
            if self.cancel.is_cancelled() {
                tracing::warn!(completed = index, total = files.len(), "run cancelled");
                return Err(PlaybookError::Interrupted {
                    completed: index,
                    total: files.len(),
                });
            }

            match self.process(path, &mut assets)? {
                FileResult::Rewritten => summary.rewritten += 1,
                FileResult::Skipped => summary.skipped += 1,
                FileResult::Failed => summary.failed += 1,
            }
        }

        tracing::info!(
            rewritten = summary.rewritten,
            skipped = summary.skipped,
            failed = summary.failed,
            "expansion finished"
        );
        Ok(summary)
    }

    fn process(
        &self,
        path: &Path,
        assets: &mut HashMap<String, PathBuf>,
    ) -> Result<FileResult, PlaybookError> {
        let source = read_source(path)?;

        let expansion = match expand_source(&source, &self.emit) {
            Ok(Outcome::Rewritten(expansion)) => expansion,
            Ok(Outcome::Skipped(reason)) => {
                tracing::debug!(file = %path.display(), %reason, "skipping");
                return Ok(FileResult::Skipped);
            }
            Err(err) => {
                tracing::error!(file = %path.display(), error = %err, "metadata evaluation failed; skipping");
                return Ok(FileResult::Failed);
            }
        };

        if let Some(first) = assets.get(&expansion.asset_file_name) {
            tracing::warn!(
                file = %path.display(),
                previous = %first.display(),
                asset = %expansion.asset_file_name,
                "hero asset name already used in this run; overwriting"
            );
        } else {
            assets.insert(expansion.asset_file_name.clone(), path.to_path_buf());
        }

        if self.dry_run {
            tracing::info!(
                file = %path.display(),
                asset = %expansion.asset_file_name,
                "would rewrite"
            );
        } else {
            self.write(path, &expansion)?;
            tracing::info!(
                file = %path.display(),
                asset = %expansion.asset_file_name,
                sections = expansion.section_count,
                "rewrote"
            );
        }
        Ok(FileResult::Rewritten)
    }

    /// Write the SVG, then replace the page. If the page write fails the
    /// asset is put back the way it was before this call.
    fn write(&self, path: &Path, expansion: &Expansion) -> std::io::Result<()> {
        fs::create_dir_all(&self.settings.assets_dir)?;
        let svg_path = self.settings.assets_dir.join(&expansion.asset_file_name);
        let previous = match fs::read(&svg_path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err),
        };
        fs::write(&svg_path, &expansion.svg)?;

        if let Err(err) = replace_file(path, &expansion.rewritten_source) {
            restore_asset(&svg_path, previous.as_deref());
            return Err(err);
        }
        Ok(())
    }
}

/// Undo an asset write: restore the old bytes, or remove a file that did
/// not exist before.
fn restore_asset(svg_path: &Path, previous: Option<&[u8]>) {
    let result = match previous {
        Some(bytes) => fs::write(svg_path, bytes),
        None => fs::remove_file(svg_path),
    };
    if let Err(err) = result {
        tracing::warn!(
            asset = %svg_path.display(),
            error = %err,
            "could not restore hero asset after failed page write"
        );
    }
}

/// Atomically replace `path` with `contents`, keeping its permissions.
fn replace_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    fs::set_permissions(tmp.path(), permissions)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "export const meta = {\n  title: 'Growth Playbook',\n  slug: 'growth',\n  tags: ['seo', 'content'],\n  cover: heroImage,\n};\n\nexport default function Post() { return null; }\n";

    struct Site {
        dir: tempfile::TempDir,
    }

    impl Site {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("content")).unwrap();
            Self { dir }
        }

        fn content(&self, name: &str) -> PathBuf {
            self.dir.path().join("content").join(name)
        }

        fn assets(&self) -> PathBuf {
            self.dir.path().join("assets")
        }

        fn write(&self, name: &str, source: &str) -> PathBuf {
            let path = self.content(name);
            fs::write(&path, source).unwrap();
            path
        }

        fn runner(&self, dry_run: bool) -> Runner {
            let settings = Settings::default().with_overrides(
                Some(self.dir.path().join("content")),
                Some(self.assets()),
            );
            Runner::new(settings, dry_run, CancellationToken::new())
        }
    }

    #[test]
    fn test_rewrites_post_and_writes_svg() {
        let site = Site::new();
        let post = site.write("growth.tsx", POST);

        let summary = site.runner(false).run().unwrap();
        assert_eq!(
            summary,
            RunSummary {
                discovered: 1,
                rewritten: 1,
                skipped: 0,
                failed: 0,
            }
        );

        let page = fs::read_to_string(&post).unwrap();
        assert!(page.contains("@generated by playbook-expand"));
        let svg = fs::read_to_string(site.assets().join("growth.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_file_without_marker_untouched() {
        let site = Site::new();
        let plain = "export default function About() { return null; }\n";
        let path = site.write("about.tsx", plain);
        site.write("growth.tsx", POST);

        let summary = site.runner(false).run().unwrap();
        assert_eq!(summary.rewritten, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(fs::read_to_string(path).unwrap(), plain);
    }

    #[test]
    fn test_evaluation_failure_continues_batch() {
        let site = Site::new();
        let broken = "export const meta = { title: computeTitle() };\n";
        let path = site.write("a-broken.tsx", broken);
        site.write("b-growth.tsx", POST);

        let summary = site.runner(false).run().unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.rewritten, 1);
        assert_eq!(fs::read_to_string(path).unwrap(), broken);
    }

    #[test]
    fn test_deeply_nested_literal_is_failed_file() {
        let site = Site::new();
        let deep = format!(
            "export const meta = {{ title: 'Deep', x: {}{} }};\n",
            "[".repeat(5000),
            "]".repeat(5000)
        );
        let path = site.write("a-deep.tsx", &deep);
        site.write("b-growth.tsx", POST);

        let summary = site.runner(false).run().unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.rewritten, 1);
        assert_eq!(fs::read_to_string(path).unwrap(), deep);
    }

    #[test]
    fn test_second_run_skips_everything() {
        let site = Site::new();
        let post = site.write("growth.tsx", POST);

        site.runner(false).run().unwrap();
        let first = fs::read_to_string(&post).unwrap();

        let summary = site.runner(false).run().unwrap();
        assert_eq!(summary.rewritten, 0);
        assert_eq!(summary.skipped, 1);
        assert_eq!(fs::read_to_string(&post).unwrap(), first);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let site = Site::new();
        let post = site.write("growth.tsx", POST);

        let summary = site.runner(true).run().unwrap();
        assert_eq!(summary.rewritten, 1);
        assert_eq!(fs::read_to_string(post).unwrap(), POST);
        assert!(!site.assets().exists());
    }

    #[test]
    fn test_cancelled_before_start() {
        let site = Site::new();
        site.write("growth.tsx", POST);

        let runner = site.runner(false);
        runner.cancel.cancel();
        let err = runner.run().unwrap_err();
        assert!(matches!(
            err,
            PlaybookError::Interrupted {
                completed: 0,
                total: 1
            }
        ));
        assert_eq!(fs::read_to_string(site.content("growth.tsx")).unwrap(), POST);
    }

    #[test]
    fn test_missing_content_dir_is_io_error() {
        let settings = Settings::default()
            .with_overrides(Some(PathBuf::from("/nonexistent/content")), None);
        let err = Runner::new(settings, false, CancellationToken::new())
            .run()
            .unwrap_err();
        assert!(matches!(err, PlaybookError::Io(_)));
    }

    #[test]
    fn test_replace_file_keeps_permissions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "old").unwrap();
        let before = fs::metadata(&path).unwrap().permissions();

        replace_file(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::metadata(&path).unwrap().permissions(), before);
    }

    fn expansion_for(site: &Site) -> Expansion {
        match expand_source(POST, &site.runner(false).emit).unwrap() {
            Outcome::Rewritten(expansion) => expansion,
            Outcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn test_failed_page_write_removes_new_asset() {
        let site = Site::new();
        let expansion = expansion_for(&site);

        let err = site
            .runner(false)
            .write(&site.content("missing/growth.tsx"), &expansion)
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(!site.assets().join("growth.svg").exists());
    }

    #[test]
    fn test_failed_page_write_keeps_existing_asset() {
        let site = Site::new();
        let expansion = expansion_for(&site);
        fs::create_dir_all(site.assets()).unwrap();
        fs::write(site.assets().join("growth.svg"), "<svg>earlier</svg>").unwrap();

        site.runner(false)
            .write(&site.content("missing/growth.tsx"), &expansion)
            .unwrap_err();
        assert_eq!(
            fs::read_to_string(site.assets().join("growth.svg")).unwrap(),
            "<svg>earlier</svg>"
        );
    }

    #[test]
    fn test_invalid_utf8_does_not_stop_batch() {
        let site = Site::new();
        let legacy = b"// r\xe9sum\xe9 helpers\nexport const x = 1;\n";
        fs::write(site.content("a-legacy.js"), legacy).unwrap();
        let post = site.write("b-growth.tsx", POST);

        let summary = site.runner(false).run().unwrap();
        assert_eq!(summary.discovered, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.rewritten, 1);
        assert_eq!(fs::read(site.content("a-legacy.js")).unwrap(), legacy);
        assert!(fs::read_to_string(post).unwrap().contains("@generated by playbook-expand"));
    }

    #[test]
    fn test_ts_modules_not_discovered_by_default() {
        let site = Site::new();
        let module = "export const meta = { title: 'Shared Config' };\n";
        let path = site.write("meta.ts", module);

        let summary = site.runner(false).run().unwrap();
        assert_eq!(summary.discovered, 0);
        assert_eq!(fs::read_to_string(path).unwrap(), module);
    }
}
