//! # Kind Command Implementation

use anyhow::Result;
use clap::Args;

use super::{Context, RepoArgs};

/// Print whether a reference is a local branch, remote branch, tag or hash
#[derive(Args, Debug)]
pub struct KindArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Reference to classify
    #[arg(value_name = "REF")]
    pub reference: String,
}

pub fn execute(ctx: &Context, args: KindArgs) -> Result<()> {
    let downloader = ctx.downloader(&args.repo.repo)?;
    let kind = downloader.commit_kind(&args.repo.working_copy(), &args.reference)?;
    println!("{}", kind);
    Ok(())
}
