// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace and a fluent builder so
// each integration test can lay out targets, link directories and config
// files without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use winmklink::config::Config;

/// An isolated workspace backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding targets, links and config files.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new, empty workspace.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        Self { root }
    }

    /// Path to the workspace root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path of the workspace config file (may not exist).
    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    /// Load the workspace config file.
    pub fn load_config(&self) -> Config {
        Config::load(&self.config_path()).expect("load config")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new, empty workspace.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` to `config.toml` in the workspace.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.ctx.config_path(), content).expect("write config file");
        self
    }

    /// Create an empty file at `relative`, creating parents as needed.
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.ctx.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create file parent");
        }
        std::fs::write(&path, "").expect("write file");
        self
    }

    /// Create a directory at `relative`.
    pub fn with_dir(self, relative: &str) -> Self {
        std::fs::create_dir_all(self.ctx.path(relative)).expect("create dir");
        self
    }

    /// Write raw `content` to `relative`, e.g. a preferences file.
    pub fn with_raw(self, relative: &str, content: &str) -> Self {
        std::fs::write(self.ctx.path(relative), content).expect("write raw file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
