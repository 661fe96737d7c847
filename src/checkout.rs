//! Checkout and merge protocol shared by every downloader.
//!
//! [`checkout`] lands a working copy on a reference. Tags cannot be merged
//! into, so checking out a tag creates a local branch of the same name;
//! everything else is a plain checkout, which leaves raw hashes detached.
//! Submodules are initialised and updated after every checkout so the working
//! copy does not look modified right after switching commits.
//!
//! [`update`] checks out a reference and then merges its remote counterpart.
//! The merge is best effort: an upstream branch that has since been deleted
//! must not fail the update.

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::git;
use crate::reference::{self, CommitKind};

fn init_submodules(repo_dir: &Path) -> Result<()> {
    git::execute(repo_dir, &["submodule", "init"])?;
    Ok(())
}

fn update_submodules(repo_dir: &Path) -> Result<()> {
    git::execute(repo_dir, &["submodule", "update"])?;
    Ok(())
}

/// Checks out `commit`, creating a branch named `commit` when it is a tag.
pub fn checkout(repo_dir: &Path, commit: &str) -> Result<()> {
    let kind = reference::classify(repo_dir, commit)?;
    let full = reference::qualify(commit, kind);

    if kind == CommitKind::Tag {
        debug!("Will create new branch {} from {}", commit, full);
        git::execute(repo_dir, &["checkout", &full, "-b", commit])?;
    } else {
        // Checking out the bare name lets git create a tracking branch for a
        // remote-only branch instead of detaching at origin/<name>.
        debug!("Will checkout {}", full);
        git::execute(repo_dir, &["checkout", commit])?;
    }

    init_submodules(repo_dir)?;
    update_submodules(repo_dir)?;
    Ok(())
}

/// Attempts to merge the remote version of `commit` without committing.
///
/// Local branches are merged from their `origin/` counterpart. Failures are
/// logged and discarded; the return value reports whether the merge applied.
pub fn try_merge(repo_dir: &Path, commit: &str) -> bool {
    let kind = match reference::classify(repo_dir, commit) {
        Ok(CommitKind::LocalBranch) => CommitKind::RemoteBranch,
        Ok(kind) => kind,
        Err(e) => {
            debug!("Not merging {}: {}", commit, e);
            return false;
        }
    };

    let full = reference::qualify(commit, kind);
    match git::execute(repo_dir, &["merge", "--no-commit", "--no-ff", &full]) {
        Ok(_) => {
            debug!("Merging changes from {}", full);
            true
        }
        Err(e) => {
            debug!("Merging changes from {}: {}", full, e);
            false
        }
    }
}

/// Lands on `commit` and folds in upstream changes.
///
/// Must be preceded by a fetch to pick up anything new. Only the checkout's
/// failure is returned; see [`try_merge`].
pub fn update(repo_dir: &Path, commit: &str) -> Result<()> {
    checkout(repo_dir, commit)?;
    try_merge(repo_dir, commit);
    Ok(())
}
