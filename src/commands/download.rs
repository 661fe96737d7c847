//! # Download Command Implementation
//!
//! Creates a working copy for a declared repository and lands it on the
//! requested branch, tag or commit. Tags are checked out into a local branch
//! of the same name.

use anyhow::{bail, Result};
use clap::Args;

use super::{Context, RepoArgs};
use reposync::output::emoji;

/// Clone a repository and land it on a reference
#[derive(Args, Debug)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Branch, tag or commit hash to check out
    #[arg(value_name = "REF")]
    pub reference: String,
}

pub fn execute(ctx: &Context, args: DownloadArgs) -> Result<()> {
    let path = args.repo.working_copy();
    if path.exists() {
        bail!(
            "Working copy {} already exists; use `reposync update` instead",
            path.display()
        );
    }

    let mut downloader = ctx.downloader(&args.repo.repo)?;
    downloader.set_commit(&args.reference);
    downloader.download_repo(&args.reference, &path)?;

    let hash = downloader.hash_for(&path, "HEAD")?;
    println!(
        "{} {} is at {} ({})",
        emoji(&ctx.output, "📥", "[OK]"),
        args.repo.repo,
        args.reference,
        hash
    );
    Ok(())
}
