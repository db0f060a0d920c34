//! Report module - assembles the snapshot report
//!
//! The report is a single text stream written front to back: an optional
//! asset excerpt section, one content block per selected file, and an
//! optional directory tree. Banners and block labels are the report's
//! fixed wire format and are emitted verbatim.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::selector::Selector;
use crate::report::excerpts::ExcerptSpec;

pub mod content;
pub mod excerpts;
pub mod tree;

/// Banner above the asset excerpt section.
pub const EXCERPTS_BANNER: &str = "ZAWARTOŚĆ WYBRANYCH PLIKÓW JSON Z FOLDERU ASSETS";

/// Banner above the content section, emitted only when the excerpt section
/// precedes it.
pub const CONTENT_BANNER: &str = "ZAWARTOŚĆ POZOSTAŁYCH PLIKÓW PROJEKTU";

/// Banner above the directory tree section.
pub const TREE_BANNER: &str = "STRUKTURA FOLDERÓW I PLIKÓW PROJEKTU";

const BANNER_RULE_WIDTH: usize = 80;

/// Everything a snapshot run needs beyond the root and output paths.
#[derive(Debug)]
pub struct SnapshotOptions {
    pub selector: Selector,
    pub skip_dirs: Vec<String>,
    pub assets_dir: PathBuf,
    /// Excerpt manifest; `None` disables the excerpt section entirely.
    pub excerpts: Option<Vec<ExcerptSpec>>,
    pub tree: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            selector: Selector::default(),
            skip_dirs: vec![".git".to_string()],
            assets_dir: PathBuf::from(excerpts::DEFAULT_ASSETS_DIR),
            excerpts: None,
            tree: false,
            quiet: false,
            verbose: false,
        }
    }
}

/// Counters reported on stderr after a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnapshotSummary {
    pub files_dumped: usize,
    pub files_skipped: usize,
}

/// Write the full report for `root` into `output`.
///
/// The output file is created (truncating any previous report) before the
/// traversal starts; failure to create or write it is the only fatal error.
/// Per-file problems inside the sections are handled there and never
/// propagate.
pub fn write_snapshot(
    root: &Path,
    output: &Path,
    options: &SnapshotOptions,
) -> Result<SnapshotSummary> {
    // Absolute root so content blocks name files by absolute path
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    let file = File::create(output)
        .with_context(|| format!("Failed to create report file: {:?}", output))?;
    let mut out = BufWriter::new(file);

    let summary = write_sections(&mut out, &root, options)
        .and_then(|summary| out.flush().map(|_| summary))
        .with_context(|| format!("Failed to write report file: {:?}", output))?;

    Ok(summary)
}

fn write_sections<W: Write>(
    out: &mut W,
    root: &Path,
    options: &SnapshotOptions,
) -> io::Result<SnapshotSummary> {
    if let Some(manifest) = &options.excerpts {
        write_banner(out, EXCERPTS_BANNER)?;
        excerpts::write_excerpt_blocks(out, root, &options.assets_dir, manifest)?;
        write_banner(out, CONTENT_BANNER)?;
    }

    let summary = content::write_content_blocks(out, root, options)?;

    if options.tree {
        write_banner(out, TREE_BANNER)?;
        tree::write_tree(out, root, &options.skip_dirs)?;
    }

    Ok(summary)
}

fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)
}
