//! Downloader for a repository that already exists on the local filesystem

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{remove_working_copy, Downloader, DownloaderState};
use crate::checkout;
use crate::error::Result;
use crate::filesystem;

/// A repository copied from a directory instead of cloned.
///
/// There is no remote: updating re-copies the source and origin fixups do
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct LocalDownloader {
    state: DownloaderState,
    /// Directory holding the source repository.
    pub path: PathBuf,
}

impl LocalDownloader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            state: DownloaderState::default(),
            path: path.into(),
        }
    }
}

impl Downloader for LocalDownloader {
    fn fetch_file(&mut self, _path: &Path, filename: &str, dst_dir: &Path) -> Result<()> {
        let src_path = self.path.join(filename);
        let dst_path = dst_dir.join(filename);

        debug!("Fetching file {} to {}", src_path.display(), dst_path.display());
        filesystem::copy_file(&src_path, &dst_path)
    }

    fn commit(&self) -> &str {
        self.state.commit()
    }

    fn set_commit(&mut self, commit: &str) {
        self.state.set_commit(commit);
    }

    fn download_repo(&mut self, commit: &str, dst_path: &Path) -> Result<()> {
        info!("Downloading local repository {}", self.path.display());

        filesystem::copy_dir(&self.path, dst_path)?;
        checkout::checkout(dst_path, commit)
    }

    fn update_repo(&mut self, path: &Path, branch: &str) -> Result<()> {
        remove_working_copy(path)?;
        self.download_repo(branch, path)
    }

    fn fixup_origin(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
