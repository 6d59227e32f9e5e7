//! Changelog rendering
//!
//! Pure text transforms from git output to markdown bullets.

mod formatter;
mod link;
mod reference;

pub use formatter::Changelog;
pub use link::{build_review_base, has_git_suffix};
pub use reference::extract_reference;
