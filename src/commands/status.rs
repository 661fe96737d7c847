//! # Status Command Implementation
//!
//! Reports whether tracked files in a working copy differ from the checked
//! out commit. This is informational and exits successfully either way.

use anyhow::Result;
use clap::Args;

use super::{Context, RepoArgs};
use reposync::output::emoji;

/// Report whether a working copy has uncommitted changes
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub repo: RepoArgs,
}

pub fn execute(ctx: &Context, args: StatusArgs) -> Result<()> {
    let downloader = ctx.downloader(&args.repo.repo)?;
    let path = args.repo.working_copy();

    if downloader.are_changes(&path)? {
        println!(
            "{} {} has uncommitted changes",
            emoji(&ctx.output, "📝", "[MODIFIED]"),
            args.repo.repo
        );
    } else {
        println!("{} {} is clean", emoji(&ctx.output, "✅", "[CLEAN]"), args.repo.repo);
    }
    Ok(())
}
