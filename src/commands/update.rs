//! # Update Command Implementation
//!
//! Brings an existing working copy up to date: fetches the remote once,
//! checks out the reference, merges upstream changes when possible and
//! re-syncs submodules. A branch whose upstream counterpart is gone is left
//! where it is rather than reported as an error.

use anyhow::{bail, Result};
use clap::Args;

use super::{Context, RepoArgs};
use reposync::output::emoji;

/// Fetch and merge upstream changes into a working copy
#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Branch, tag or commit hash the working copy should follow
    #[arg(value_name = "REF")]
    pub reference: String,
}

pub fn execute(ctx: &Context, args: UpdateArgs) -> Result<()> {
    let path = args.repo.working_copy();
    let mut downloader = ctx.downloader(&args.repo.repo)?;

    // A missing working copy has nothing to protect; the local variant
    // recreates it.
    if path.exists() && downloader.are_changes(&path)? {
        bail!(
            "{} has uncommitted changes; commit or discard them before updating",
            path.display()
        );
    }

    downloader.set_commit(&args.reference);
    downloader.update_repo(&path, &args.reference)?;
    downloader.fixup_origin(&path)?;

    let hash = downloader.hash_for(&path, "HEAD")?;
    println!(
        "{} {} updated to {} ({})",
        emoji(&ctx.output, "🔄", "[OK]"),
        args.repo.repo,
        args.reference,
        hash
    );
    Ok(())
}
