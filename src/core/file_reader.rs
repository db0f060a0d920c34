//! Tolerant text reading for report content
//!
//! Decoding never fails: invalid UTF-8 sequences are replaced with U+FFFD,
//! so any file the OS lets us read produces text. Only I/O errors (missing
//! file, permissions) surface to the caller.

use std::fs;
use std::io;
use std::path::Path;

/// Read a file's entire content as UTF-8, replacing invalid sequences.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(String::from_utf8_lossy(err.as_bytes()).into_owned()),
    }
}
