//! File selection rules for the content section
//!
//! A file's contents are dumped when its base name ends with one of the
//! configured suffixes or equals one of the allow-listed names. Both checks
//! are case-sensitive and look at the base file name only, never at the
//! directory part.

/// Suffixes dumped by default (Kotlin sources).
pub const DEFAULT_SUFFIXES: &[&str] = &[".kt", ".kts"];

/// File names dumped by default regardless of suffix.
pub const DEFAULT_ALLOW_NAMES: &[&str] = &[
    "colors.xml",
    "AndroidManifest.xml",
    "themes.xml",
    "Wigilia Paschalna.json",
    "11 czerwca - św. Barnaby Apostoła.json",
];

/// Decides which files' contents go into the report.
#[derive(Debug, Clone)]
pub struct Selector {
    suffixes: Vec<String>,
    names: Vec<String>,
}

impl Selector {
    /// Build a selector from suffix and allow-list values.
    ///
    /// Suffixes may be given with or without the leading dot; `rs` and
    /// `.rs` select the same files.
    pub fn new(suffixes: &[String], names: &[String]) -> Self {
        let suffixes = suffixes
            .iter()
            .map(|s| {
                if s.starts_with('.') {
                    s.clone()
                } else {
                    format!(".{}", s)
                }
            })
            .collect();
        Self {
            suffixes,
            names: names.to_vec(),
        }
    }

    /// True when the base file name ends with a configured suffix or equals
    /// an allow-listed name.
    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
            || self.names.iter().any(|n| n == file_name)
    }
}

impl Default for Selector {
    fn default() -> Self {
        let suffixes: Vec<String> = DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect();
        let names: Vec<String> = DEFAULT_ALLOW_NAMES.iter().map(|s| s.to_string()).collect();
        Self::new(&suffixes, &names)
    }
}
