//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture holding a temporary project directory with
//! a local git "upstream" repository that downloaders can clone from, plus
//! helpers to drive the `reposync` binary inside it.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_git_manifest("core");
//! fixture.command().args(["download", "core", "master"]).assert().success();
//! ```

#![allow(dead_code)]

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{git, set_identity};
    pub use super::TestFixture;
}

/// Runs git in `dir` with a fixed identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=reposync tests",
            "-c",
            "user.email=tests@reposync.invalid",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Records a committer identity in `dir`'s own config, so merges the
/// library runs there work without a global git identity.
pub fn set_identity(dir: &Path) {
    git(dir, &["config", "user.name", "reposync tests"]);
    git(dir, &["config", "user.email", "tests@reposync.invalid"]);
}

/// A temporary project directory with an upstream repository at `upstream/`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a fixture whose upstream has one commit on `master`.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let fixture = Self { temp_dir };

        let upstream = fixture.upstream();
        std::fs::create_dir_all(&upstream).expect("Failed to create upstream");
        git(&upstream, &["init", "-q"]);
        git(&upstream, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        set_identity(&upstream);
        fixture.commit_file("README.md", "upstream\n", "initial commit");
        fixture
    }

    /// Path of the upstream repository.
    pub fn upstream(&self) -> PathBuf {
        self.temp_dir.path().join("upstream")
    }

    /// Commit `content` as `name` in the upstream and return the new hash.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        let upstream = self.upstream();
        let file = upstream.join(name);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&file, content).expect("Failed to write file");
        git(&upstream, &["add", name]);
        git(&upstream, &["commit", "-q", "-m", message]);
        git(&upstream, &["rev-parse", "HEAD"])
    }

    /// Run git in the upstream repository.
    pub fn upstream_git(&self, args: &[&str]) -> String {
        git(&self.upstream(), args)
    }

    /// Write `project.yml` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp_dir
            .child("project.yml")
            .write_str(content)
            .expect("Failed to write manifest");
        self
    }

    /// Write a manifest declaring `name` as a `git` repository cloned from
    /// the upstream.
    pub fn with_git_manifest(self, name: &str) -> Self {
        let manifest = format!(
            "project.name: demo\nproject.repositories:\n    - {name}\n\nrepository.{name}:\n    type: git\n    url: \"{url}\"\n",
            name = name,
            url = self.upstream().display()
        );
        self.with_manifest(&manifest)
    }

    /// Write a manifest declaring `name` as a `local` repository copied from
    /// the upstream.
    pub fn with_local_manifest(self, name: &str) -> Self {
        let manifest = format!(
            "repository.{name}:\n    type: local\n    path: \"{path}\"\n",
            name = name,
            path = self.upstream().display()
        );
        self.with_manifest(&manifest)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default working copy location of repository `name`.
    pub fn working_copy(&self, name: &str) -> PathBuf {
        self.path().join("repos").join(name)
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command running in this fixture's directory.
    ///
    /// Colors are off and the settings file points inside the fixture so the
    /// user's own credentials never leak into tests.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("reposync");
        cmd.current_dir(self.path())
            .env("REPOSYNC_SETTINGS", self.path().join("settings.yml"))
            .env_remove("RUST_LOG")
            .env("GIT_AUTHOR_NAME", "reposync tests")
            .env("GIT_AUTHOR_EMAIL", "tests@reposync.invalid")
            .env("GIT_COMMITTER_NAME", "reposync tests")
            .env("GIT_COMMITTER_EMAIL", "tests@reposync.invalid")
            .arg("--color")
            .arg("never");
        cmd
    }
}
