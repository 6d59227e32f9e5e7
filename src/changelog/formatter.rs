//! Lazy rendering of commit subjects into changelog entries

use super::reference::extract_reference;
use crate::model::ChangelogEntry;

/// Iterator adapter yielding one [`ChangelogEntry`] per commit subject that
/// carries a change request reference.
///
/// Subjects without a reference are skipped. Order is preserved.
pub struct Changelog<'a, I> {
    summaries: I,
    review_base: &'a str,
}

impl<'a, I> Changelog<'a, I> {
    /// Wrap `summaries`, linking every entry under `review_base`
    pub fn new<T>(summaries: T, review_base: &'a str) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            summaries: summaries.into_iter(),
            review_base,
        }
    }
}

impl<I, S> Iterator for Changelog<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ChangelogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        for summary in self.summaries.by_ref() {
            let line = summary.as_ref();
            match extract_reference(line) {
                Some(reference) => return Some(ChangelogEntry::new(reference, self.review_base)),
                None => log::debug!("skipping commit without change request: {line}"),
            }
        }
        None
    }
}
