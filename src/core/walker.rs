//! Directory traversal yielding one (directory, files) listing at a time
//!
//! Uses walkdir for per-level enumeration, sorted by file name so that the
//! traversal (and everything rendered from it) is deterministic.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One visited directory together with the files directly inside it.
#[derive(Debug)]
pub struct DirListing {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Depth-first traversal of a root directory.
///
/// Every readable directory under the root is yielded exactly once, parents
/// before children, siblings in file-name order. Directories whose base name
/// is in the skip set are never yielded and never descended into.
/// Directories that cannot be read are dropped without aborting the walk.
pub struct Walker {
    pending: Vec<PathBuf>,
    skip_dirs: Vec<String>,
}

impl Walker {
    pub fn new(root: &Path, skip_dirs: &[String]) -> Self {
        Self {
            pending: vec![root.to_path_buf()],
            skip_dirs: skip_dirs.to_vec(),
        }
    }

    fn is_skipped(&self, name: &OsStr) -> bool {
        self.skip_dirs.iter().any(|s| OsStr::new(s) == name)
    }
}

impl Iterator for Walker {
    type Item = DirListing;

    fn next(&mut self) -> Option<DirListing> {
        loop {
            let dir = self.pending.pop()?;
            if !dir.is_dir() {
                continue;
            }

            let mut files = Vec::new();
            let mut subdirs = Vec::new();
            let mut failed = false;

            for entry in WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
            {
                let entry = match entry {
                    Ok(e) => e,
                    Err(_) => {
                        failed = true;
                        continue;
                    }
                };
                if entry.file_type().is_dir() {
                    if !self.is_skipped(entry.file_name()) {
                        subdirs.push(entry.into_path());
                    }
                } else {
                    files.push(entry.into_path());
                }
            }

            // A directory that produced nothing but errors was not readable;
            // drop it instead of reporting an empty listing.
            if failed && files.is_empty() && subdirs.is_empty() {
                continue;
            }

            // LIFO stack: reverse so the first-sorted child is popped first.
            subdirs.reverse();
            self.pending.extend(subdirs);

            return Some(DirListing { dir, files });
        }
    }
}
