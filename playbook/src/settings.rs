//! Run settings.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional YAML file, and command-line flags (which clap also fills from
//! `PLAYBOOK_*` environment variables). Relative paths in a settings file
//! are resolved against the file's directory.

use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::{Deserialize, Serialize};

use playbook_render::page::EmitOptions;

use crate::error::SettingsError;

/// Settings file picked up from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "playbook.yaml";

/// Default content directory.
pub const DEFAULT_CONTENT_DIR: &str = "content/blog";

/// Default hero asset directory. The default import prefix
/// `@/assets/playbooks` resolves here.
pub const DEFAULT_ASSETS_DIR: &str = "src/assets/playbooks";

/// Import alias for the project's source root, and the directory it names.
pub const SOURCE_ALIAS: (&str, &str) = ("@/", "src");

/// File name globs considered post sources by default. Plain `.ts` is left
/// out because the emitted page contains JSX.
pub const DEFAULT_INCLUDE: &[&str] = &["*.tsx", "*.jsx", "*.js", "*.mdx"];

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory walked for post sources.
    pub content_dir: PathBuf,
    /// Directory hero SVGs are written to.
    pub assets_dir: PathBuf,
    /// File name globs a source must match.
    pub include: Vec<String>,
    /// Import path of the page layout component.
    pub layout_import: String,
    /// Import path of the section navigation component.
    pub nav_import: String,
    /// Import prefix for hero assets.
    pub asset_import_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        let emit = EmitOptions::default();
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            include: DEFAULT_INCLUDE.iter().map(|s| (*s).to_string()).collect(),
            layout_import: emit.layout_import,
            nav_import: emit.nav_import,
            asset_import_prefix: emit.asset_import_prefix,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from [`DEFAULT_SETTINGS_FILE`] if it
    /// exists, or fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if an explicitly named file is missing, the
    /// YAML is malformed or has unknown fields, or a value is unusable.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = Path::new(DEFAULT_SETTINGS_FILE);
                if implicit.is_file() {
                    Self::from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a settings file.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|_| SettingsError::MissingFile {
            path: path.to_path_buf(),
        })?;
        let mut settings = Self::from_yaml(&raw, path)?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            settings.content_dir = base.join(&settings.content_dir);
            settings.assets_dir = base.join(&settings.assets_dir);
        }

        tracing::debug!(path = %path.display(), "loaded settings file");
        Ok(settings)
    }

    /// Parse and validate settings YAML. `origin` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ParseError`] for malformed YAML and the
    /// validation errors of [`Settings::validate`].
    pub fn from_yaml(raw: &str, origin: &Path) -> Result<Self, SettingsError> {
        // An empty file means "all defaults".
        let settings: Self = if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(raw).map_err(|e| SettingsError::ParseError {
                path: origin.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, content_dir: Option<PathBuf>, assets_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = content_dir {
            self.content_dir = dir;
        }
        if let Some(dir) = assets_dir {
            self.assets_dir = dir;
        }
        self
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] for an empty include list, an include glob
    /// that does not compile, or a blank import path.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.include.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "include".to_string(),
                message: "at least one pattern is required".to_string(),
            });
        }
        self.include_patterns()?;

        for (field, value) in [
            ("layout_import", &self.layout_import),
            ("nav_import", &self.nav_import),
            ("asset_import_prefix", &self.asset_import_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Compile the include globs.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidPattern`] for the first glob that
    /// does not compile.
    pub fn include_patterns(&self) -> Result<Vec<Pattern>, SettingsError> {
        self.include
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| SettingsError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Directory the asset import prefix points at, when it uses the
    /// [`SOURCE_ALIAS`]. Relative to the project root.
    #[must_use]
    pub fn aliased_assets_dir(&self) -> Option<PathBuf> {
        let (alias, root) = SOURCE_ALIAS;
        let rest = self.asset_import_prefix.strip_prefix(alias)?;
        Some(Path::new(root).join(rest.trim_end_matches('/')))
    }

    /// The aliased asset directory, if `assets_dir` does not end with it.
    /// Pages emitted under such settings import SVGs from somewhere other
    /// than where they are written.
    #[must_use]
    pub fn asset_import_mismatch(&self) -> Option<PathBuf> {
        self.aliased_assets_dir()
            .filter(|expected| !self.assets_dir.ends_with(expected))
    }

    /// Import paths for the page emitter.
    #[must_use]
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            layout_import: self.layout_import.clone(),
            nav_import: self.nav_import.clone(),
            asset_import_prefix: self.asset_import_prefix.clone(),
        }
    }
}
