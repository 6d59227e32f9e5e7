//! Review link base derived from a remote URL

use crate::git::constants::defaults::{GIT_SUFFIX, REVIEW_PATH};

/// Turn a remote URL into the prefix of a change request page.
///
/// The first `.git` in the URL becomes `/pull/`, wherever it sits. A URL
/// without `.git` comes back unchanged.
pub fn build_review_base(remote_url: &str) -> String {
    remote_url.replacen(GIT_SUFFIX, REVIEW_PATH, 1)
}

/// Whether [`build_review_base`] has anything to substitute in `remote_url`
pub fn has_git_suffix(remote_url: &str) -> bool {
    remote_url.contains(GIT_SUFFIX)
}
