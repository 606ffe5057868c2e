//! Ignore-rule loading and the file inclusion predicate.
//!
//! Rules come from a line-oriented configuration file at the scan root:
//! blank lines and lines starting with `#` are skipped, a trailing `/` marks
//! a directory entry, everything else is a file name. Matching is by exact
//! base name only; there is no globbing at this layer.

use crate::error::SnapshotError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// File name suffixes eligible for documentation. A dotfile whose full name
/// appears verbatim in this list is also eligible.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[
    ".py", ".txt", ".js", ".json", ".ts", ".mjs", ".cjs", ".md", ".tsx", ".html", ".css", ".env",
    ".php",
];

/// Exclusion lists for one run, immutable after loading.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    files: HashSet<String>,
    directories: HashSet<String>,
}

impl IgnoreRules {
    /// Loads rules from `ignore_file` under `root`.
    ///
    /// A missing file yields empty sets. The given output file names are
    /// always added to the ignored-file set so previous snapshot output is
    /// never re-ingested as input.
    pub fn load(
        root: &Path,
        ignore_file: &str,
        output_names: &[&str],
    ) -> Result<Self, SnapshotError> {
        let mut rules = IgnoreRules::default();
        let path = root.join(ignore_file);
        if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| SnapshotError::io(&path, e))?;
            for line in text.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if line.ends_with('/') {
                    rules
                        .directories
                        .insert(line.trim_end_matches('/').to_string());
                } else {
                    rules.files.insert(line.to_string());
                }
            }
        }
        for name in output_names {
            rules.files.insert((*name).to_string());
        }
        Ok(rules)
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.directories.contains(name)
    }

    /// The inclusion predicate: a file is documented iff it is not ignored
    /// and either carries a recognized extension or is a dotfile listed
    /// verbatim among the recognized names.
    pub fn includes_file(&self, name: &str) -> bool {
        if self.files.contains(name) {
            return false;
        }
        if RECOGNIZED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            return true;
        }
        name.starts_with('.') && RECOGNIZED_EXTENSIONS.contains(&name)
    }
}
