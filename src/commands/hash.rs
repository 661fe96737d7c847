//! # Hash Command Implementation

use anyhow::Result;
use clap::Args;

use super::{Context, RepoArgs};

/// Print the commit hash a reference resolves to
#[derive(Args, Debug)]
pub struct HashArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Branch, tag or commit to resolve
    #[arg(value_name = "REF", default_value = "HEAD")]
    pub reference: String,
}

pub fn execute(ctx: &Context, args: HashArgs) -> Result<()> {
    let downloader = ctx.downloader(&args.repo.repo)?;
    let hash = downloader.hash_for(&args.repo.working_copy(), &args.reference)?;
    println!("{}", hash);
    Ok(())
}
