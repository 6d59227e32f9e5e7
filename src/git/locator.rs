//! Discovery of the git executable

use std::path::PathBuf;

use super::GitError;
use super::constants::GIT_COMMAND;

/// Find git on the search path.
///
/// Uses the `which` crate so Windows extensions (`.exe`, `.cmd`) resolve the
/// same way a shell would resolve them.
pub fn locate_git() -> Result<PathBuf, GitError> {
    let path = which::which(GIT_COMMAND).map_err(|_| GitError::GitNotFound)?;
    log::debug!("using git at {}", path.display());
    Ok(path)
}
