//! Command line arguments

use clap::{ArgAction, Parser};

/// Print a markdown changelog of the pull requests merged since the latest
/// release tag.
///
/// Run inside a git checkout with an `origin` remote. The latest tag matching
/// `v[0-9]*` reachable from `origin/master` is the starting point; every commit
/// after it whose subject ends in `(#<number>)` becomes a bullet linking to
/// that pull request.
#[derive(Debug, Parser)]
#[command(name = "prlog", disable_help_flag = true)]
pub struct Args {
    /// Print help
    #[arg(short = 'h', short_alias = '?', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}
