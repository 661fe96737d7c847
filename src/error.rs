//! # Error Handling
//!
//! This module defines the centralized error type for `reposync`. It uses the
//! `thiserror` library to build a single `Error` enum covering every failure
//! the library can report, each variant carrying enough context (the command
//! that failed, the reference that could not be resolved, the offending
//! configuration field) for an operator to diagnose the underlying git-level
//! cause.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Variants fall into three groups:
//!   - setup failures (`ToolNotFound`, `Config`),
//!   - git failures (`CommandFailed`, `UnresolvableReference`, `UnknownKind`),
//!   - wrapped library errors (`Io`, `Yaml`).
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the crate.

use thiserror::Error;

/// Main error type for reposync operations
#[derive(Error, Debug)]
pub enum Error {
    /// The git executable could not be located on the search path.
    #[error("Can't find {tool} binary on PATH")]
    ToolNotFound { tool: String },

    /// A git subprocess could not be spawned or exited with a non-zero status.
    ///
    /// `command` is the display form of the invocation, with credentials
    /// already masked. `output` holds the captured stderr and stdout.
    #[error("Git command failed: {command}{}", if output.is_empty() { String::new() } else { format!("\n{}", output) })]
    CommandFailed { command: String, output: String },

    /// The reference is not a local branch, remote branch, tag or commit.
    #[error("Cannot determine commit type of \"{reference}\"")]
    UnresolvableReference { reference: String },

    /// A commit kind was built from a value that names no known kind.
    #[error("Unknown commit type: {kind}")]
    UnknownKind { kind: String },

    /// A manifest or settings entry is missing a required field or holds an
    /// invalid value.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
