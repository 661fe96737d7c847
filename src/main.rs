//! # reposync CLI
//!
//! This is the binary entry point for the `reposync` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initialising logging at the requested verbosity.
//! - Executing the appropriate command and reporting its errors.
//!
//! The repository logic lives in the `reposync` library crate; the binary is
//! a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
