//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `reposync` command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the shared [`Context`] and the parsed
//!   `Args` and calls into the `reposync` library to do the work.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use reposync::config::{Manifest, Settings};
use reposync::defaults::{default_settings_path, default_working_copy};
use reposync::downloader::Downloader;
use reposync::output::OutputConfig;

pub mod commits;
pub mod completions;
pub mod download;
pub mod fetch_file;
pub mod fixup_origin;
pub mod hash;
pub mod kind;
pub mod list;
pub mod status;
pub mod update;

/// Global options every command can use.
#[derive(Debug)]
pub struct Context {
    pub manifest: PathBuf,
    pub settings: Option<PathBuf>,
    pub output: OutputConfig,
}

impl Context {
    pub fn load_manifest(&self) -> Result<Manifest> {
        Manifest::from_file(&self.manifest)
            .with_context(|| format!("Failed to load manifest {}", self.manifest.display()))
    }

    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.settings.clone().unwrap_or_else(default_settings_path);
        Settings::from_file(&path)
            .with_context(|| format!("Failed to load settings {}", path.display()))
    }

    /// Builds the configured downloader for repository `name`.
    pub fn downloader(&self, name: &str) -> Result<Box<dyn Downloader>> {
        let manifest = self.load_manifest()?;
        let settings = self.load_settings()?;
        Ok(manifest.downloader(name, &settings)?)
    }
}

/// Selects a declared repository and its working copy.
#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Repository name as declared in the manifest (`repository.<name>`)
    pub repo: String,

    /// Location of the working copy. Defaults to `repos/<name>`.
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

impl RepoArgs {
    pub fn working_copy(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| default_working_copy(&self.repo))
    }
}
