//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and defaults.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Where to send operators who do not have git installed
pub const INSTALL_GUIDE_URL: &str = "https://git-scm.com/book/en/v2/Getting-Started-Installing-Git";

/// git subcommands
pub mod commands {
    pub const DESCRIBE: &str = "describe";
    pub const REMOTE: &str = "remote";
    pub const REMOTE_GET_URL: &str = "get-url";
    pub const LOG: &str = "log";
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given directory (global flag)
    pub const CHANGE_DIR: &str = "-C";
    /// Consider lightweight tags as well as annotated ones
    pub const TAGS: &str = "--tags";
    /// Print the tag name only, without the `-<n>-g<hash>` suffix
    pub const ABBREV_ZERO: &str = "--abbrev=0";
    /// Only consider tags matching the following glob
    pub const MATCH: &str = "--match";
    /// Print the subject line of each commit only
    pub const SUBJECT_FORMAT: &str = "--format=%s";
}

/// Defaults describing the repository layout the changelog is built against
pub mod defaults {
    /// Remote whose URL the review links are derived from
    pub const REMOTE: &str = "origin";
    /// Remote-tracking reference of the mainline branch
    pub const MAINLINE_REF: &str = "origin/master";
    /// Glob a tag must match to count as a release
    pub const TAG_PATTERN: &str = "v[0-9]*";
    /// Suffix replaced in the remote URL to form the review link base
    pub const GIT_SUFFIX: &str = ".git";
    /// Path segment leading to a change request page
    pub const REVIEW_PATH: &str = "/pull/";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
