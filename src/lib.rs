//! prlog - pull request changelog since the latest release
//!
//! This library provides:
//! - [`changelog`]: Reference extraction and markdown rendering
//! - [`cli`]: Command line arguments
//! - [`config`]: Remote, mainline and tag pattern settings
//! - [`git`]: git discovery, command execution and parsing
//! - [`model`]: Domain models
//! - [`pipeline`]: The end-to-end run

pub mod changelog;
pub mod cli;
pub mod config;
pub mod git;
pub mod model;
pub mod pipeline;

pub use pipeline::{ChangelogError, generate, run};
