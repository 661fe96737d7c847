//! Downloader for repositories on a hosted git service

use std::path::Path;

use log::{debug, info};

use super::{clone_branch, show_file, Downloader, DownloaderState, PRIMARY_BRANCH};
use crate::checkout;
use crate::error::Result;
use crate::git::GitCommand;
use crate::origin::{self, AuthenticatedOrigin, Credentials, RemoteUrls};

/// Server used when the manifest names none.
pub const DEFAULT_SERVER: &str = "github.com";

/// A repository addressed as `<server>/<user>/<repo>`.
///
/// Every command that talks to the network runs with `origin` temporarily
/// pointed at the authenticated URL; the working copy keeps the public URL
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct GithubDownloader {
    state: DownloaderState,
    /// Empty means [`DEFAULT_SERVER`].
    pub server: String,
    pub user: String,
    pub repo: String,
    pub credentials: Credentials,
}

impl GithubDownloader {
    pub fn new(
        server: impl Into<String>,
        user: impl Into<String>,
        repo: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            state: DownloaderState::default(),
            server: server.into(),
            user: user.into(),
            repo: repo.into(),
            credentials,
        }
    }

    fn server(&self) -> &str {
        if self.server.is_empty() {
            DEFAULT_SERVER
        } else {
            &self.server
        }
    }

    /// The authenticated and public URLs of this repository.
    pub fn remote_urls(&self) -> RemoteUrls {
        RemoteUrls::hosted(self.server(), &self.user, &self.repo, &self.credentials)
    }

    fn authenticated_command(&self, path: &Path, cmd: GitCommand) -> Result<Vec<u8>> {
        let urls = self.remote_urls();
        origin::authenticated_command(path, &urls, &self.credentials.password(), cmd)
    }

    fn fetch(&mut self, repo_dir: &Path) -> Result<()> {
        let urls = self.remote_urls();
        let password = self.credentials.password();
        let repo = &self.repo;
        self.state.fetch_cache().cached_fetch(|| {
            debug!("Fetching repo {}", repo);
            let fetch = GitCommand::new(["fetch", "--tags"]);
            origin::authenticated_command(repo_dir, &urls, &password, fetch)?;
            Ok(())
        })
    }
}

impl Downloader for GithubDownloader {
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
        let urls = self.remote_urls();
        let password = self.credentials.password();

        info!(
            "Downloading repository {} (commit: {}) from {}",
            self.repo, commit, urls.public
        );

        clone_branch(
            &urls.authenticated,
            &origin::redact(&urls.authenticated, &password),
            PRIMARY_BRANCH,
            dst_path,
        )?;

        // The clone recorded the authenticated URL as origin.
        let _restore = AuthenticatedOrigin::restore_on_drop(dst_path, &urls, password);
        checkout::checkout(dst_path, commit)
    }

    fn update_repo(&mut self, path: &Path, branch: &str) -> Result<()> {
        self.fetch(path)?;
        checkout::update(path, branch)?;
        checkout::checkout(path, branch)
    }

    fn fixup_origin(&self, path: &Path) -> Result<()> {
        let urls = self.remote_urls();
        origin::fixup_origin(path, &urls.public, &self.credentials.password())?;
        Ok(())
    }
}
