//! # Downloaders
//!
//! A downloader knows how to bring a dependency's working copy into
//! existence and keep it on the reference the manifest asks for. All three
//! variants implement the [`Downloader`] trait:
//!
//! - [`GithubDownloader`]: a repository on a hosted service, addressed by
//!   server/user/repo, with optional credentials injected around network
//!   commands.
//! - [`GitDownloader`]: any git remote, URL taken verbatim from the manifest.
//! - [`LocalDownloader`]: a repository on the local filesystem that is copied
//!   rather than cloned.
//!
//! The variants share no base type. Common behavior is composed from the
//! free functions in this module together with [`crate::checkout`],
//! [`crate::fetch`] and [`crate::origin`].

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::fetch::FetchCache;
use crate::git::{self, GitCommand};
use crate::reference::{self, CommitKind};

mod github;
mod local;
mod remote;

pub use github::GithubDownloader;
pub use local::LocalDownloader;
pub use remote::GitDownloader;

/// Branch cloned before checking out the real target.
pub const PRIMARY_BRANCH: &str = "master";

/// Operations every downloader supports.
///
/// `path` arguments name an existing working copy; `dst_path` names where a
/// new one should be created.
pub trait Downloader {
    /// Writes `filename` as it exists at [`Downloader::commit`] into
    /// `dst_dir`, creating the directory if needed.
    fn fetch_file(&mut self, path: &Path, filename: &str, dst_dir: &Path) -> Result<()>;

    /// The reference this downloader currently targets.
    fn commit(&self) -> &str;

    fn set_commit(&mut self, commit: &str);

    /// Creates a working copy at `dst_path` and lands it on `commit`.
    fn download_repo(&mut self, commit: &str, dst_path: &Path) -> Result<()>;

    /// The full commit hash `commit` resolves to.
    fn hash_for(&self, path: &Path, commit: &str) -> Result<String> {
        hash_for(path, commit)
    }

    /// The hash of `commit` plus every branch and tag pointing at it, sorted.
    fn commits_for(&self, path: &Path, commit: &str) -> Result<Vec<String>> {
        commits_for(path, commit)
    }

    /// Brings the working copy at `path` up to date with `branch`.
    fn update_repo(&mut self, path: &Path, branch: &str) -> Result<()>;

    /// Whether the working copy has unstaged modifications.
    fn are_changes(&self, path: &Path) -> Result<bool> {
        are_changes(path)
    }

    fn commit_kind(&self, path: &Path, commit: &str) -> Result<CommitKind> {
        reference::classify(path, commit)
    }

    /// Repairs the working copy's `origin` remote if it has drifted.
    fn fixup_origin(&self, path: &Path) -> Result<()>;
}

/// Per-instance state shared by every variant.
#[derive(Debug, Default, Clone)]
pub struct DownloaderState {
    commit: String,
    fetch: FetchCache,
}

impl DownloaderState {
    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn set_commit(&mut self, commit: &str) {
        self.commit = commit.to_string();
    }

    pub fn fetch_cache(&mut self) -> &mut FetchCache {
        &mut self.fetch
    }
}

/// Resolves `commit` to the hash of the commit it names.
pub fn hash_for(repo_dir: &Path, commit: &str) -> Result<String> {
    let full = reference::full_name(repo_dir, commit)?;
    git::execute_text(
        repo_dir,
        &["rev-parse", "--verify", &format!("{}^{{commit}}", full)],
    )
}

/// Lists the hash of `commit` and all refs pointing at it, sorted.
pub fn commits_for(repo_dir: &Path, commit: &str) -> Result<Vec<String>> {
    let hash = hash_for(repo_dir, commit)?;

    let refs = git::execute_text(
        repo_dir,
        &["for-each-ref", "--format=%(refname:short)", "--points-at", &hash],
    )?;

    let mut lines = vec![hash];
    lines.extend(refs.lines().filter(|l| !l.is_empty()).map(str::to_string));
    lines.sort();
    Ok(lines)
}

/// Whether `git diff --name-only` reports anything.
pub fn are_changes(repo_dir: &Path) -> Result<bool> {
    let output = git::execute(repo_dir, &["diff", "--name-only"])?;
    Ok(!output.is_empty())
}

/// Writes `filename` as of `commit` to `dst_dir/filename`.
pub fn show_file(repo_dir: &Path, commit: &str, filename: &str, dst_dir: &Path) -> Result<()> {
    fs::create_dir_all(dst_dir)?;

    let full = reference::full_name(repo_dir, commit)?;
    let dst_path = dst_dir.join(filename);
    debug!("Fetching file {} to {}", filename, dst_path.display());

    let data = git::execute(repo_dir, &["show", &format!("{}:{}", full, filename)])?;
    if let Some(parent) = dst_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dst_path, data)?;
    Ok(())
}

/// Clones `branch` of `url` into `dst_path`; `shown_url` is what gets logged.
pub fn clone_branch(url: &str, shown_url: &str, branch: &str, dst_path: &Path) -> Result<()> {
    if let Some(parent) = dst_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    GitCommand::new(["clone", "-b", branch])
        .masked_arg(url, shown_url)
        .arg(dst_path)
        .run()?;
    Ok(())
}

/// Removes a working copy, treating an already missing one as removed.
pub(crate) fn remove_working_copy(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Io(e)),
    }
}
