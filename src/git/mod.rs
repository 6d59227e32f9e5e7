//! git command execution layer
//!
//! This module locates git, runs read-only queries against a checkout and
//! parses their output.

pub mod constants;
mod executor;
mod locator;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::GitExecutor;
pub use locator::locate_git;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,

    #[error("git produced no output for `{0}`")]
    EmptyOutput(String),
}

/// Read-only queries the changelog needs from a repository
///
/// `GitExecutor` answers them by running git; tests substitute canned data.
pub trait RepositoryClient {
    /// Most recent release tag reachable from the mainline reference
    fn latest_tag(&self) -> Result<String, GitError>;

    /// URL of the configured remote
    fn remote_url(&self) -> Result<String, GitError>;

    /// Subject lines of commits in `from_tag..to_ref`, newest first
    fn commit_summaries(&self, from_tag: &str, to_ref: &str) -> Result<Vec<String>, GitError>;
}
