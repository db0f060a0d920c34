//! Per-file content blocks
//!
//! Every file passing the selector is read in full and emitted as a labeled
//! block naming it by absolute path. Unreadable files are reported on
//! stderr and skipped; they never leave a partial block behind.

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use crate::core::file_reader::read_text_lossy;
use crate::core::walker::Walker;
use crate::report::{SnapshotOptions, SnapshotSummary};

/// Walk `root` and write one content block per selected file.
pub fn write_content_blocks<W: Write>(
    out: &mut W,
    root: &Path,
    options: &SnapshotOptions,
) -> io::Result<SnapshotSummary> {
    let mut summary = SnapshotSummary::default();

    for listing in Walker::new(root, &options.skip_dirs) {
        for path in listing.files {
            let file_name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            if !options.selector.matches(&file_name) {
                continue;
            }

            // Read fully before writing anything: a failed read must not
            // leave a partial block.
            match read_text_lossy(&path) {
                Ok(content) => {
                    writeln!(out, "-")?;
                    writeln!(out, "nazwa pliku: {}", path.display())?;
                    writeln!(out, "treść:")?;
                    out.write_all(content.as_bytes())?;
                    out.write_all(b"\n\n")?;
                    summary.files_dumped += 1;
                    if options.verbose && !options.quiet {
                        eprintln!("dumped {}", path.display());
                    }
                }
                Err(err) => {
                    summary.files_skipped += 1;
                    if !options.quiet {
                        eprintln!(
                            "{} cannot read {}: {}",
                            "Warning:".yellow(),
                            path.display(),
                            err
                        );
                    }
                }
            }
        }
    }

    Ok(summary)
}
