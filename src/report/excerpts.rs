//! Asset excerpt section
//!
//! Each manifest entry names a file under the assets directory, excerpted
//! either whole or limited to its first N lines. Entries that cannot be
//! read produce an in-band BŁĄD notice under their header instead of
//! aborting the run.

use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::core::file_reader::read_text_lossy;

/// Directory under the root where manifest entries are resolved.
pub const DEFAULT_ASSETS_DIR: &str = "app/src/main/assets";

/// Line limit applied to the limited entries of the built-in manifest.
pub const DEFAULT_EXCERPT_LINES: usize = 100;

/// Built-in manifest: two line-limited asset files and one taken whole.
pub static DEFAULT_MANIFEST: Lazy<Vec<ExcerptSpec>> = Lazy::new(|| {
    vec![
        ExcerptSpec {
            name: "Wigilia Paschalna.json".to_string(),
            lines: Some(DEFAULT_EXCERPT_LINES),
        },
        ExcerptSpec {
            name: "piesni.json".to_string(),
            lines: Some(DEFAULT_EXCERPT_LINES),
        },
        ExcerptSpec {
            name: "11 czerwca - św. Barnaby Apostoła.json".to_string(),
            lines: None,
        },
    ]
});

/// One asset excerpt request: a file name and an optional line limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptSpec {
    pub name: String,
    /// `None` excerpts the whole file.
    pub lines: Option<usize>,
}

impl FromStr for ExcerptSpec {
    type Err = String;

    /// Parse "NAME" or "NAME:LINES". Only a trailing all-digit segment is
    /// treated as a line limit; any other colon stays part of the name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Excerpt entry cannot be empty".to_string());
        }

        if let Some((name, limit)) = s.rsplit_once(':') {
            if !limit.is_empty() && limit.chars().all(|c| c.is_ascii_digit()) {
                if name.is_empty() {
                    return Err(format!("Excerpt entry '{}' has no file name", s));
                }
                let lines: usize = limit
                    .parse()
                    .map_err(|_| format!("Invalid line limit: {}", limit))?;
                if lines == 0 {
                    return Err("Line limit must be at least 1".to_string());
                }
                return Ok(ExcerptSpec {
                    name: name.to_string(),
                    lines: Some(lines),
                });
            }
        }

        Ok(ExcerptSpec {
            name: s.to_string(),
            lines: None,
        })
    }
}

/// Write one labeled excerpt block per manifest entry.
pub fn write_excerpt_blocks<W: Write>(
    out: &mut W,
    root: &Path,
    assets_dir: &Path,
    manifest: &[ExcerptSpec],
) -> io::Result<()> {
    for spec in manifest {
        let qualifier = match spec.lines {
            Some(limit) => format!("pierwsze {} linii", limit),
            None => "cały plik".to_string(),
        };
        writeln!(out, "--- Zawartość pliku: {} ({}) ---", spec.name, qualifier)?;

        let path = root.join(assets_dir).join(&spec.name);
        match read_text_lossy(&path) {
            Ok(content) => match spec.lines {
                Some(limit) => {
                    for line in content.lines().take(limit) {
                        writeln!(out, "{}", line)?;
                    }
                }
                None => {
                    out.write_all(content.as_bytes())?;
                    if !content.is_empty() && !content.ends_with('\n') {
                        writeln!(out)?;
                    }
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                writeln!(out, "BŁĄD: Nie znaleziono pliku {}", spec.name)?;
            }
            Err(err) => {
                writeln!(out, "BŁĄD: Nie można odczytać pliku {}: {}", spec.name, err)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
