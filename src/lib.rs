//! # reposync
//!
//! This library resolves, fetches and synchronizes local working copies of
//! git dependencies declared in a project manifest. It is used by the
//! `reposync` command-line tool but can be embedded by any build tool that
//! needs to land dependency checkouts on a branch, tag or commit.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::Path;
//! use reposync::config::{Manifest, Settings};
//! use reposync::downloader::Downloader;
//!
//! let manifest = Manifest::parse(r#"
//! repository.core:
//!     type: git
//!     url: https://git.example.com/core.git
//! "#).unwrap();
//!
//! let mut core = manifest.downloader("core", &Settings::default()).unwrap();
//! core.download_repo("v1.0", Path::new("repos/core")).unwrap();
//! println!("{}", core.hash_for(Path::new("repos/core"), "v1.0").unwrap());
//! ```
//!
//! ## Core Concepts
//!
//! - **Reference classification (`reference`)**: decides whether a string names
//!   a local branch, a remote branch, a tag or a commit, and spells it the way
//!   git needs for that kind.
//! - **Checkout protocol (`checkout`)**: lands a working copy on a reference,
//!   turning tags into local branches, and merges upstream changes on update
//!   without failing when the upstream branch is gone.
//! - **Fetch latch (`fetch`)**: fetches each remote at most once per run.
//! - **Origin management (`origin`)**: injects credentials around network
//!   commands and keeps `origin` pointed at the public URL.
//! - **Downloaders (`downloader`)**: the hosted-service, generic-remote and
//!   local-filesystem variants behind one trait.
//! - **Configuration (`config`)**: builds downloaders from manifest blocks and
//!   per-user credential settings.

pub mod checkout;
pub mod config;
pub mod defaults;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod filesystem;
pub mod git;
pub mod origin;
pub mod output;
pub mod reference;

#[cfg(test)]
mod test_support;
