//! Directory tree section
//!
//! Renders every folder and file under the root as an indented listing:
//! four spaces per depth level, directories with a trailing slash, files
//! one level deeper than the directory holding them. All files appear here,
//! including those whose contents were not dumped.

use std::io::{self, Write};
use std::path::Path;

use crate::core::walker::Walker;

const INDENT: &str = "    ";

/// Write the indented folder/file tree for `root`.
pub fn write_tree<W: Write>(out: &mut W, root: &Path, skip_dirs: &[String]) -> io::Result<()> {
    for listing in Walker::new(root, skip_dirs) {
        let depth = listing
            .dir
            .strip_prefix(root)
            .map(|rel| rel.components().count())
            .unwrap_or(0);

        let dir_name = match listing.dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => listing.dir.display().to_string(),
        };
        writeln!(out, "{}{}/", INDENT.repeat(depth), dir_name)?;

        for file in &listing.files {
            if let Some(name) = file.file_name() {
                writeln!(
                    out,
                    "{}{}",
                    INDENT.repeat(depth + 1),
                    name.to_string_lossy()
                )?;
            }
        }
    }
    Ok(())
}
