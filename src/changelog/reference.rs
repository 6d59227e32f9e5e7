//! Change request reference extraction

use regex::Regex;
use std::sync::LazyLock;

use crate::model::ChangeRequestRef;

/// Regex for the trailing change request marker of a commit subject
/// Format: `<title> (#<number>)`
/// Example: `Fix panic on empty input (#128)`
///
/// Groups:
/// 1. number (ASCII digits between `(#` and `)`)
static REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#([0-9]+)\)$").expect("Invalid reference regex"));

/// Extract the change request a commit subject points at.
///
/// Returns `None` unless the line ends exactly with `(#<digits>)`. The title is
/// the line with its last whitespace-delimited token dropped, so a marker glued
/// to the preceding word takes that word with it.
pub fn extract_reference(line: &str) -> Option<ChangeRequestRef> {
    let captures = REFERENCE_REGEX.captures(line)?;
    let number = captures.get(1)?.as_str().to_string();

    let title = match line.rsplit_once(char::is_whitespace) {
        Some((head, _)) => head.trim().to_string(),
        None => String::new(),
    };

    Some(ChangeRequestRef { title, number })
}
