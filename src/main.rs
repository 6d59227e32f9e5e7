//! prlog - pull request changelog since the latest release
//!
//! Binary entry point.

use std::io::{self, Write};

use clap::Parser;

use prlog::cli::Args;

/// Send log records to stderr so stdout carries only the changelog.
fn initialize_logger() -> color_eyre::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("prlog")
        .build();

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Exits on -h / -? before anything touches the repository
    Args::parse();

    initialize_logger()?;

    let repo_root = std::env::current_dir()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    prlog::run(repo_root, &mut out)?;
    out.flush()?;

    Ok(())
}
