//! # Reference Classification
//!
//! A target reference taken from a manifest can name a local branch, a
//! remote branch, a tag or a raw commit. Git commands need different spellings
//! for each (`origin/<name>` for remote branches, `tags/<name>` for tags), so
//! every operation first classifies the raw string and then qualifies it.
//!
//! Classification is never cached: checking out a tag creates a local branch
//! of the same name, which changes the answer for later calls.
//!
//! ## Probe Order
//!
//! [`classify`] probes in a fixed order and the first match wins:
//!
//! 1. `HEAD` is always a hash.
//! 2. A reference that resolves as-is (`git merge-base <ref> <ref>`) is a
//!    local branch when `refs/heads/<ref>` exists, a hash when it names
//!    neither a branch nor a tag. A bare tag name falls through.
//! 3. `origin/<ref>` resolves: remote branch.
//! 4. `tags/<ref>` resolves: tag.
//!
//! Reordering the probes changes which kind wins for ambiguous names (a tag
//! and a remote branch sharing a name resolves as the remote branch).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::git;

/// Name of the remote every working copy tracks.
pub const REMOTE: &str = "origin";

/// What a reference string names in a working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitKind {
    RemoteBranch,
    LocalBranch,
    Tag,
    Hash,
}

impl CommitKind {
    pub const ALL: [CommitKind; 4] = [
        CommitKind::RemoteBranch,
        CommitKind::LocalBranch,
        CommitKind::Tag,
        CommitKind::Hash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitKind::RemoteBranch => "remote-branch",
            CommitKind::LocalBranch => "local-branch",
            CommitKind::Tag => "tag",
            CommitKind::Hash => "hash",
        }
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CommitKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind {
                kind: s.to_string(),
            })
    }
}

impl TryFrom<i32> for CommitKind {
    type Error = Error;

    /// Decodes a kind from its position in [`CommitKind::ALL`]
    /// (0 remote branch, 1 local branch, 2 tag, 3 hash).
    fn try_from(value: i32) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| CommitKind::ALL.get(i).copied())
            .ok_or_else(|| Error::UnknownKind {
                kind: value.to_string(),
            })
    }
}

/// Resolves `commit` with a self merge-base; any resolvable commit-ish
/// satisfies it, so this is purely an existence probe.
fn merge_base(repo_dir: &Path, commit: &str) -> Result<String> {
    git::execute_text(repo_dir, &["merge-base", commit, commit])
}

fn ref_exists(repo_dir: &Path, full_ref: &str) -> bool {
    git::execute(repo_dir, &["show-ref", "--verify", "--quiet", full_ref]).is_ok()
}

/// Whether a local branch named `branch` exists.
pub fn branch_exists(repo_dir: &Path, branch: &str) -> bool {
    ref_exists(repo_dir, &format!("refs/heads/{}", branch))
}

/// Whether a tag named `tag` exists.
pub fn tag_exists(repo_dir: &Path, tag: &str) -> bool {
    ref_exists(repo_dir, &format!("refs/tags/{}", tag))
}

/// Determines what `commit` names in the working copy at `repo_dir`.
pub fn classify(repo_dir: &Path, commit: &str) -> Result<CommitKind> {
    if commit == "HEAD" {
        return Ok(CommitKind::Hash);
    }

    if merge_base(repo_dir, commit).is_ok() {
        if branch_exists(repo_dir, commit) {
            return Ok(CommitKind::LocalBranch);
        }
        if !tag_exists(repo_dir, commit) {
            return Ok(CommitKind::Hash);
        }
    }

    if merge_base(repo_dir, &format!("{}/{}", REMOTE, commit)).is_ok() {
        return Ok(CommitKind::RemoteBranch);
    }
    if merge_base(repo_dir, &format!("tags/{}", commit)).is_ok() {
        return Ok(CommitKind::Tag);
    }

    Err(Error::UnresolvableReference {
        reference: commit.to_string(),
    })
}

/// Prefixes `commit` the way git needs it spelled for `kind`.
pub fn qualify(commit: &str, kind: CommitKind) -> String {
    match kind {
        CommitKind::RemoteBranch => format!("{}/{}", REMOTE, commit),
        CommitKind::Tag => format!("tags/{}", commit),
        CommitKind::Hash | CommitKind::LocalBranch => commit.to_string(),
    }
}

/// Classifies and qualifies `commit` in one step.
pub fn full_name(repo_dir: &Path, commit: &str) -> Result<String> {
    let kind = classify(repo_dir, commit)?;
    Ok(qualify(commit, kind))
}
