//! Changelog entry model

use std::fmt;

/// Change request referenced at the end of a commit subject, e.g. `(#42)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequestRef {
    /// Commit subject with the trailing reference token removed
    pub title: String,
    /// Digits between `(#` and `)`, exactly as written
    pub number: String,
}

/// One bullet of the rendered changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// Commit subject without the trailing reference token
    pub title: String,
    /// Change request number (e.g., "42")
    pub number: String,
    /// Review page of the change request
    pub url: String,
}

impl ChangelogEntry {
    /// Build an entry whose link points at `<review_base><number>`
    pub fn new(reference: ChangeRequestRef, review_base: &str) -> Self {
        let url = format!("{review_base}{}", reference.number);
        Self {
            title: reference.title,
            number: reference.number,
            url,
        }
    }

    /// Markdown link token appended to the title, leading space included
    pub fn link(&self) -> String {
        format!(" ([#{}]({}))", self.number, self.url)
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            // Nothing but the reference was in the subject
            write!(f, "-{}", self.link())
        } else {
            write!(f, "- {}{}", self.title, self.link())
        }
    }
}
