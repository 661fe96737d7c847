//! # Commits Command Implementation
//!
//! Lists the hash a reference resolves to together with every branch and
//! tag that points at the same commit, sorted. With `--json` the list is
//! printed as a JSON array for consumption by other tools.

use anyhow::Result;
use clap::Args;

use super::{Context, RepoArgs};

/// List the commit hash and every branch and tag pointing at it
#[derive(Args, Debug)]
pub struct CommitsArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Branch, tag or commit to resolve
    #[arg(value_name = "REF", default_value = "HEAD")]
    pub reference: String,

    /// Print a JSON array instead of one name per line
    #[arg(long)]
    pub json: bool,
}

pub fn execute(ctx: &Context, args: CommitsArgs) -> Result<()> {
    let downloader = ctx.downloader(&args.repo.repo)?;
    let commits = downloader.commits_for(&args.repo.working_copy(), &args.reference)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&commits)?);
    } else {
        for name in commits {
            println!("{}", name);
        }
    }
    Ok(())
}
