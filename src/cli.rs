//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands::{self, Context};
use reposync::defaults::DEFAULT_MANIFEST;
use reposync::output::OutputConfig;

/// reposync - Keep dependency working copies on the right branch, tag or commit
#[derive(Parser, Debug)]
#[command(name = "reposync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Project manifest declaring the repositories
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Per-user settings file holding repository credentials.
    ///
    /// Defaults to `~/.reposync/repos.yml`.
    #[arg(long, global = true, value_name = "FILE", env = "REPOSYNC_SETTINGS")]
    settings: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Echo every git command that is run
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a repository and land it on a reference
    Download(commands::download::DownloadArgs),

    /// Fetch and merge upstream changes into a working copy
    Update(commands::update::UpdateArgs),

    /// Extract one file as it exists at a reference
    FetchFile(commands::fetch_file::FetchFileArgs),

    /// Print the commit hash a reference resolves to
    Hash(commands::hash::HashArgs),

    /// List the commit hash and every branch and tag pointing at it
    Commits(commands::commits::CommitsArgs),

    /// Print whether a reference is a local branch, remote branch, tag or hash
    Kind(commands::kind::KindArgs),

    /// Report whether a working copy has uncommitted changes
    Status(commands::status::StatusArgs),

    /// Point the working copy's origin back at the configured URL
    FixupOrigin(commands::fixup_origin::FixupOriginArgs),

    /// List the repositories declared in the manifest
    List(commands::list::ListArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// The log level implied by `--log-level`, `--quiet` and `--verbose`.
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            self.log_level
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let output = OutputConfig::from_env_and_flag(&self.color);

        // RUST_LOG still wins over the flags when set.
        env_logger::Builder::new()
            .filter_level(self.level_filter())
            .parse_default_env()
            .format_timestamp(None)
            .format_target(false)
            .write_style(output.write_style())
            .init();

        let ctx = Context {
            manifest: self.manifest,
            settings: self.settings,
            output,
        };

        match self.command {
            Commands::Download(args) => commands::download::execute(&ctx, args),
            Commands::Update(args) => commands::update::execute(&ctx, args),
            Commands::FetchFile(args) => commands::fetch_file::execute(&ctx, args),
            Commands::Hash(args) => commands::hash::execute(&ctx, args),
            Commands::Commits(args) => commands::commits::execute(&ctx, args),
            Commands::Kind(args) => commands::kind::execute(&ctx, args),
            Commands::Status(args) => commands::status::execute(&ctx, args),
            Commands::FixupOrigin(args) => commands::fixup_origin::execute(&ctx, args),
            Commands::List(args) => commands::list::execute(&ctx, args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_level_is_info() {
        let cli = Cli::parse_from(["reposync", "list"]);
        assert_eq!(cli.level_filter(), LevelFilter::Info);
        assert_eq!(cli.manifest, PathBuf::from("project.yml"));
    }

    #[test]
    fn test_quiet_and_verbose_levels() {
        let cli = Cli::parse_from(["reposync", "-q", "list"]);
        assert_eq!(cli.level_filter(), LevelFilter::Warn);

        let cli = Cli::parse_from(["reposync", "list", "--verbose"]);
        assert_eq!(cli.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_explicit_log_level() {
        let cli = Cli::parse_from(["reposync", "--log-level", "error", "list"]);
        assert_eq!(cli.level_filter(), LevelFilter::Error);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["reposync", "-q", "-v", "list"]).is_err());
    }

    #[test]
    fn test_download_arguments() {
        let cli = Cli::parse_from(["reposync", "download", "core", "v1.0", "--path", "deps/core"]);
        let Commands::Download(args) = cli.command else {
            panic!("expected download");
        };
        assert_eq!(args.repo.repo, "core");
        assert_eq!(args.reference, "v1.0");
        assert_eq!(args.repo.working_copy(), PathBuf::from("deps/core"));
    }
}
