//! # Fixup-Origin Command Implementation
//!
//! Resets a working copy's `origin` remote to the URL the manifest
//! configures. A warning is logged when the remote had drifted.

use anyhow::Result;
use clap::Args;

use super::{Context, RepoArgs};

/// Point the working copy's origin back at the configured URL
#[derive(Args, Debug)]
pub struct FixupOriginArgs {
    #[command(flatten)]
    pub repo: RepoArgs,
}

pub fn execute(ctx: &Context, args: FixupOriginArgs) -> Result<()> {
    let downloader = ctx.downloader(&args.repo.repo)?;
    downloader.fixup_origin(&args.repo.working_copy())?;
    Ok(())
}
