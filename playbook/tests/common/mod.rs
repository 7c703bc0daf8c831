//! Shared integration-test harness: copies fixture sites into temporary
//! directories and runs the `playbook` binary against them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A throwaway site tree seeded from `tests/fixtures`.
pub struct Site {
    dir: tempfile::TempDir,
}

impl Site {
    /// Copy `tests/fixtures/blog` into `<tmp>/content/blog`.
    #[allow(clippy::missing_panics_doc)]
    pub fn from_fixtures() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        copy_tree(&fixture_path("blog"), &dir.path().join("content/blog"));
        Self { dir }
    }

    /// Site root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Content directory.
    pub fn content_dir(&self) -> PathBuf {
        self.root().join("content/blog")
    }

    /// Assets directory.
    pub fn assets_dir(&self) -> PathBuf {
        self.root().join("src/assets/playbooks")
    }

    /// Read a file under the content directory.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.content_dir().join(rel)).expect("failed to read content file")
    }

    /// Run the binary with the site root as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_playbook"))
            .args(args)
            .current_dir(self.root())
            .env_remove("PLAYBOOK_CONTENT_DIR")
            .env_remove("PLAYBOOK_ASSETS_DIR")
            .env_remove("PLAYBOOK_CONFIG")
            .env_remove("PLAYBOOK_LOG_LEVEL")
            .output()
            .expect("failed to run playbook")
    }
}

/// Path to a test fixture.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run the binary from the current directory.
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_playbook"))
        .args(args)
        .output()
        .expect("failed to run playbook")
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("failed to create directory");
    for entry in fs::read_dir(from).expect("failed to read fixture dir") {
        let entry = entry.expect("bad dir entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("no file type").is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("failed to copy fixture");
        }
    }
}
