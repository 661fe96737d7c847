//! Downloader for an arbitrary git remote

use std::path::Path;

use log::{debug, info};

use super::{clone_branch, show_file, Downloader, DownloaderState, PRIMARY_BRANCH};
use crate::checkout;
use crate::error::Result;
use crate::git;
use crate::origin;

/// A repository reachable at a URL git understands as-is.
#[derive(Debug, Clone, Default)]
pub struct GitDownloader {
    state: DownloaderState,
    pub url: String,
}

impl GitDownloader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            state: DownloaderState::default(),
            url: url.into(),
        }
    }

    fn fetch(&mut self, repo_dir: &Path) -> Result<()> {
        let url = &self.url;
        self.state.fetch_cache().cached_fetch(|| {
            debug!("Fetching repo {}", url);
            git::execute(repo_dir, &["fetch", "--tags"])?;
            Ok(())
        })
    }
}

impl Downloader for GitDownloader {
    fn fetch_file(&mut self, path: &Path, filename: &str, dst_dir: &Path) -> Result<()> {
        self.fetch(path)?;
        show_file(path, self.state.commit(), filename, dst_dir)
    }

    fn commit(&self) -> &str {
        self.state.commit()
    }

    fn set_commit(&mut self, commit: &str) {
        self.state.set_commit(commit);
    }

    fn download_repo(&mut self, commit: &str, dst_path: &Path) -> Result<()> {
        info!("Downloading repository {} (commit: {})", self.url, commit);

        clone_branch(&self.url, &self.url, PRIMARY_BRANCH, dst_path)?;
        checkout::checkout(dst_path, commit)
    }

    fn update_repo(&mut self, path: &Path, branch: &str) -> Result<()> {
        self.fetch(path)?;
        checkout::update(path, branch)?;
        checkout::checkout(path, branch)
    }

    fn fixup_origin(&self, path: &Path) -> Result<()> {
        origin::fixup_origin(path, &self.url, "")?;
        Ok(())
    }
}
