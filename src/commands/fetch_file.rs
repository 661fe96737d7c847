//! # Fetch-File Command Implementation
//!
//! Writes a single file as it exists at a reference into a destination
//! directory without touching the working copy's checkout. Network variants
//! fetch the remote first; the local variant copies from its source
//! directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::{Context, RepoArgs};
use reposync::output::emoji;

/// Extract one file as it exists at a reference
#[derive(Args, Debug)]
pub struct FetchFileArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// File path relative to the repository root
    pub file: String,

    /// Branch, tag or commit to read the file from
    #[arg(long = "ref", value_name = "REF")]
    pub reference: String,

    /// Directory the file is written into (created if missing)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,
}

pub fn execute(ctx: &Context, args: FetchFileArgs) -> Result<()> {
    let path = args.repo.working_copy();
    let mut downloader = ctx.downloader(&args.repo.repo)?;

    downloader.set_commit(&args.reference);
    downloader.fetch_file(&path, &args.file, &args.dest)?;

    println!(
        "{} Wrote {}",
        emoji(&ctx.output, "📄", "[OK]"),
        args.dest.join(&args.file).display()
    );
    Ok(())
}
