//! Git subprocess execution
//!
//! Every git invocation in the crate goes through [`GitCommand`]. The git
//! binary is located once per process on the search path; each command is
//! rooted at its working copy through the spawned process's working
//! directory, so the process-wide current directory is never touched.
//!
//! Arguments that carry credentials are added with
//! [`GitCommand::masked_arg`]: the real value is passed to git while the
//! masked value is what gets logged and what ends up in
//! [`Error::CommandFailed`].

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use log::debug;

use crate::error::{Error, Result};

static GIT_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Returns the location of the git binary, looking it up on first use.
pub fn git_path() -> Result<&'static Path> {
    GIT_PATH
        .get_or_init(|| which::which("git").ok())
        .as_deref()
        .ok_or_else(|| Error::ToolNotFound {
            tool: "git".to_string(),
        })
}

/// A single git invocation.
#[derive(Debug, Clone, Default)]
pub struct GitCommand {
    args: Vec<OsString>,
    shown: Vec<String>,
    /// (real, shown) pairs substituted in captured output.
    masks: Vec<(String, String)>,
    dir: Option<PathBuf>,
}

impl GitCommand {
    /// Creates a command from plain (non-secret) arguments.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        args.into_iter().fold(Self::default(), |cmd, a| cmd.arg(a))
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        let arg = arg.as_ref();
        self.shown.push(arg.to_string_lossy().into_owned());
        self.args.push(arg.to_os_string());
        self
    }

    /// Adds an argument whose real value must never be displayed.
    pub fn masked_arg(mut self, arg: impl AsRef<OsStr>, shown: impl Into<String>) -> Self {
        let arg = arg.as_ref();
        let shown = shown.into();
        let real = arg.to_string_lossy().into_owned();
        if !real.is_empty() && real != shown {
            self.masks.push((real, shown.clone()));
        }
        self.args.push(arg.to_os_string());
        self.shown.push(shown);
        self
    }

    /// Replaces every masked argument's real value in `text` with its shown
    /// form.
    fn mask(&self, text: &str) -> String {
        self.masks
            .iter()
            .fold(text.to_string(), |acc, (real, shown)| acc.replace(real, shown))
    }

    /// Roots the command at `dir`.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.dir = Some(dir.to_path_buf());
        self
    }

    /// The command line as it is logged, with masked arguments substituted.
    pub fn display(&self) -> String {
        let mut line = String::from("git");
        for arg in &self.shown {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Runs the command and returns its captured stdout.
    ///
    /// Fails with [`Error::ToolNotFound`] when git is not installed and
    /// with [`Error::CommandFailed`] when it cannot be spawned or exits
    /// non-zero.
    pub fn run(&self) -> Result<Vec<u8>> {
        let git = git_path()?;
        let display = self.display();
        match &self.dir {
            Some(dir) => debug!("[{}] {}", dir.display(), display),
            None => debug!("{}", display),
        }

        let mut cmd = Command::new(git);
        cmd.args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| Error::CommandFailed {
            command: display.clone(),
            output: self.mask(&e.to_string()),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let captured = [stderr.trim(), stdout.trim()]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join("\n");
            return Err(Error::CommandFailed {
                command: display,
                output: self.mask(&captured),
            });
        }

        Ok(output.stdout)
    }

    /// Runs the command and returns stdout as trimmed text.
    pub fn run_text(&self) -> Result<String> {
        let stdout = self.run()?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }
}

/// Runs `git <args>` rooted at `dir`, returning the raw stdout.
pub fn execute(dir: &Path, args: &[&str]) -> Result<Vec<u8>> {
    GitCommand::new(args).current_dir(dir).run()
}

/// Runs `git <args>` rooted at `dir`, returning trimmed stdout.
pub fn execute_text(dir: &Path, args: &[&str]) -> Result<String> {
    GitCommand::new(args).current_dir(dir).run_text()
}
