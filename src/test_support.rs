//! Git repository fixtures shared by the unit tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Runs git in `dir` with a fixed identity, panicking on failure.
pub fn git_in(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Reposync Test",
            "-c",
            "user.email=test@reposync.invalid",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Records a committer identity in `dir`'s own config, so commands the
/// library runs there (merges) work without a global git identity.
pub fn set_identity(dir: &Path) {
    git_in(dir, &["config", "user.name", "Reposync Test"]);
    git_in(dir, &["config", "user.email", "test@reposync.invalid"]);
}

/// A throwaway repository on branch `master` with one initial commit.
pub struct Fixture {
    temp: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("upstream");
        fs::create_dir_all(&path).unwrap();
        git_in(&path, &["init", "-q"]);
        git_in(&path, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        set_identity(&path);
        let fixture = Self { temp, path };
        fixture.commit_file("README.md", "# upstream\n", "initial commit");
        fixture
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A scratch location next to the repository, not yet created.
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    pub fn git(&self, args: &[&str]) -> String {
        git_in(&self.path, args)
    }

    /// Writes `name`, commits it and returns the new commit hash.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        let file = self.path.join(name);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file, content).unwrap();
        self.git(&["add", name]);
        self.git(&["commit", "-q", "-m", message]);
        self.head()
    }

    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"])
    }

    /// Clones this repository to `name` beside it and returns the clone path.
    pub fn clone_to(&self, name: &str) -> PathBuf {
        let dst = self.scratch(name);
        let src = self.path.to_string_lossy().into_owned();
        let dst_str = dst.to_string_lossy().into_owned();
        git_in(self.temp.path(), &["clone", "-q", &src, &dst_str]);
        set_identity(&dst);
        dst
    }
}
