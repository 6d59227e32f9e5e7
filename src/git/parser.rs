//! git output parser
//!
//! Turns the raw stdout of git queries into values the pipeline consumes.

/// Parse `git describe --tags --abbrev=0` output
///
/// git prints the tag name followed by a newline. Returns `None` when nothing
/// but whitespace was printed.
pub fn parse_describe(output: &str) -> Option<String> {
    first_line(output)
}

/// Parse `git remote get-url <remote>` output
pub fn parse_remote_url(output: &str) -> Option<String> {
    first_line(output)
}

/// Parse `git log --format=%s` output into subject lines
///
/// Order is preserved (git prints newest first). Blank lines are kept out
/// since they cannot carry a change request reference.
pub fn parse_summaries(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
