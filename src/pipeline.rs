//! End-to-end changelog generation
//!
//! Locate git, resolve the latest release tag, derive the review link base,
//! fetch the commit subjects since the tag and print them as markdown.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::changelog::{Changelog, build_review_base, has_git_suffix};
use crate::config::Config;
use crate::git::constants::INSTALL_GUIDE_URL;
use crate::git::{GitError, GitExecutor, RepositoryClient, locate_git};

/// Fatal failures of a changelog run
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("git is not installed or not in PATH. Install it by following {guide}", guide = INSTALL_GUIDE_URL)]
    MissingTool,

    #[error("Failed to resolve the latest release tag matching '{pattern}' on {reference}: {source}")]
    TagResolution {
        pattern: String,
        reference: String,
        source: GitError,
    },

    #[error("Failed to read the URL of remote '{remote}': {source}")]
    RemoteConfig { remote: String, source: GitError },

    #[error("Failed to fetch commits in {range}: {source}")]
    LogFetch { range: String, source: GitError },

    #[error("Failed to write changelog: {0}")]
    Output(#[from] io::Error),
}

/// Generate the changelog for the checkout at `repo_root` and write it to `out`
pub fn run<W: Write>(repo_root: PathBuf, out: &mut W) -> Result<(), ChangelogError> {
    let git = locate_git().map_err(|_| ChangelogError::MissingTool)?;
    let config = Config::default();
    let client = GitExecutor::with_repo_path(git, repo_root, config.clone());
    generate(&client, &config, out)
}

/// Query `client` and write the changelog to `out`
///
/// Each line is written as soon as it is known, so output produced before a
/// failing stage stays in `out`.
pub fn generate<C, W>(client: &C, config: &Config, out: &mut W) -> Result<(), ChangelogError>
where
    C: RepositoryClient + ?Sized,
    W: Write,
{
    let tag = client
        .latest_tag()
        .map_err(|source| ChangelogError::TagResolution {
            pattern: config.tag_pattern.clone(),
            reference: config.mainline_ref.clone(),
            source,
        })?;
    writeln!(out, "[+] Latest release tag: {tag}")?;

    let remote_url = client
        .remote_url()
        .map_err(|source| ChangelogError::RemoteConfig {
            remote: config.remote.clone(),
            source,
        })?;
    if !has_git_suffix(&remote_url) {
        log::warn!("remote URL '{remote_url}' has no .git suffix; change request links may not resolve");
    }
    let review_base = build_review_base(&remote_url);

    let summaries = client
        .commit_summaries(&tag, &config.mainline_ref)
        .map_err(|source| ChangelogError::LogFetch {
            range: format!("{tag}..{}", config.mainline_ref),
            source,
        })?;
    log::debug!("{} commits since {tag}", summaries.len());

    writeln!(out, "[+] Changelog")?;
    writeln!(out)?;

    for entry in Changelog::new(summaries, &review_base) {
        writeln!(out, "{entry}")?;
    }

    Ok(())
}
