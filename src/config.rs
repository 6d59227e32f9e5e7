//! Changelog generation settings

use crate::git::constants::defaults;

/// Where to look for releases and how to link change requests.
///
/// Only the defaults are reachable from the command line; the struct exists so
/// the executor and the pipeline share a single source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Remote whose URL the review links are derived from
    pub remote: String,
    /// Remote-tracking reference of the mainline branch
    pub mainline_ref: String,
    /// Glob a tag must match to count as a release
    pub tag_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: defaults::REMOTE.to_string(),
            mainline_ref: defaults::MAINLINE_REF.to_string(),
            tag_pattern: defaults::TAG_PATTERN.to_string(),
        }
    }
}
