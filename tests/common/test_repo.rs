//! TestRepo helper for integration tests.
//!
//! Provides a temporary git checkout with a bare `origin` remote next to it.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Settings passed to every git invocation so tests do not depend on the
/// host's global configuration.
const GIT_TEST_CONFIG: &[&str] = &[
    "-c",
    "user.name=prlog tests",
    "-c",
    "user.email=prlog@example.com",
    "-c",
    "commit.gpgsign=false",
    "-c",
    "tag.gpgsign=false",
];

/// A temporary git checkout with an `origin` remote.
///
/// Layout inside the temp directory:
/// - `remote.git/` bare repository acting as `origin`
/// - `work/` checkout on branch `master`
///
/// Everything is cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create the bare remote and a checkout pointing at it.
    pub fn new() -> Self {
        let repo = Self::without_remote();
        run_git(&repo.root(), &["init", "--bare", "remote.git"]);
        repo.git(&["remote", "add", "origin", &repo.remote_url()]);
        repo
    }

    /// Create a checkout on `master` with no remote configured.
    pub fn without_remote() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        std::fs::create_dir(repo.path()).expect("Failed to create work directory");
        repo.git(&["init"]);
        // Independent of init.defaultBranch
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/master"]);

        repo
    }

    fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Get the path to the checkout.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    /// URL configured for `origin` (the bare repository's path).
    pub fn remote_url(&self) -> String {
        self.dir
            .path()
            .join("remote.git")
            .to_string_lossy()
            .into_owned()
    }

    /// Execute a git command in the checkout.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(&self.path(), args)
    }

    /// Record an empty commit with the given message.
    pub fn commit(&self, message: &str) {
        self.git(&["commit", "--allow-empty", "-m", message]);
    }

    /// Create a lightweight tag at HEAD.
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    /// Create an annotated tag at HEAD.
    pub fn annotated_tag(&self, name: &str) {
        self.git(&["tag", "-a", name, "-m", &format!("Release {name}")]);
    }

    /// Push `master` to origin, updating `origin/master`.
    pub fn push(&self) {
        self.git(&["push", "origin", "master"]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(GIT_TEST_CONFIG)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git command");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {:?} failed with exit code {:?}:\n{}",
            args,
            output.status.code(),
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}
