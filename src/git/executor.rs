//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use super::constants::{commands, errors, flags};
use super::{GitError, RepositoryClient, parser};
use crate::config::Config;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Absolute path of the git binary
    git: PathBuf,
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
    config: Config,
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new(git: PathBuf, config: Config) -> Self {
        Self {
            git,
            repo_path: None,
            config,
        }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(git: PathBuf, path: PathBuf, config: Config) -> Self {
        Self {
            git,
            repo_path: Some(path),
            config,
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(&self.git);

        // Add repository path if specified
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::CHANGE_DIR).arg(path);
        }

        cmd.args(args);
        log::debug!("running git {}", args.join(" "));

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git describe` for the newest release tag on the mainline
    pub fn describe_raw(&self) -> Result<String, GitError> {
        self.run(&[
            commands::DESCRIBE,
            flags::TAGS,
            flags::ABBREV_ZERO,
            flags::MATCH,
            self.config.tag_pattern.as_str(),
            self.config.mainline_ref.as_str(),
        ])
    }

    /// Run `git remote get-url`
    pub fn remote_url_raw(&self) -> Result<String, GitError> {
        self.run(&[commands::REMOTE, commands::REMOTE_GET_URL, self.config.remote.as_str()])
    }

    /// Run `git log` for the subject lines in a revision range
    pub fn log_raw(&self, range: &str) -> Result<String, GitError> {
        self.run(&[commands::LOG, flags::SUBJECT_FORMAT, range])
    }
}

impl RepositoryClient for GitExecutor {
    fn latest_tag(&self) -> Result<String, GitError> {
        let output = self.describe_raw()?;
        parser::parse_describe(&output)
            .ok_or_else(|| GitError::EmptyOutput(commands::DESCRIBE.to_string()))
    }

    fn remote_url(&self) -> Result<String, GitError> {
        let output = self.remote_url_raw()?;
        parser::parse_remote_url(&output).ok_or_else(|| {
            GitError::EmptyOutput(format!("{} {}", commands::REMOTE, commands::REMOTE_GET_URL))
        })
    }

    fn commit_summaries(&self, from_tag: &str, to_ref: &str) -> Result<Vec<String>, GitError> {
        let output = self.log_raw(&format!("{from_tag}..{to_ref}"))?;
        Ok(parser::parse_summaries(&output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_current_directory() {
        let executor = GitExecutor::new(PathBuf::from("/usr/bin/git"), Config::default());
        assert!(executor.repo_path.is_none());
    }

    #[test]
    fn test_executor_with_path() {
        let executor = GitExecutor::with_repo_path(
            PathBuf::from("/usr/bin/git"),
            PathBuf::from("/tmp/test"),
            Config::default(),
        );
        assert_eq!(executor.repo_path, Some(PathBuf::from("/tmp/test")));
    }

    #[test]
    fn test_missing_binary_maps_to_not_found() {
        let executor = GitExecutor::new(
            PathBuf::from("/nonexistent/prlog-test/git"),
            Config::default(),
        );
        let result = executor.run(&["--version"]);
        assert!(matches!(result, Err(GitError::GitNotFound)));
    }
}
