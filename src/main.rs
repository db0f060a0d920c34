//! zrzut - A CLI tool that snapshots a project into a single text report
//!
//! zrzut provides:
//! - Recursive file collection with suffix and allow-list selection
//! - Optional excerpts of selected asset files at the top of the report
//! - Optional indented directory tree at the bottom of the report
//! - Tolerant reading that never fails on invalid UTF-8

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod report;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
