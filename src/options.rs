use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the line-oriented ignore configuration file read from the root.
pub const IGNORE_FILE: &str = ".projectignore";
/// Default name of the Markdown document with tree and file contents.
pub const OUTPUT_FILE: &str = "project_structure.md";
/// Default name of the Markdown document with the tree only.
pub const STRUCTURE_FILE: &str = "project_structure_only.md";

/// Content is skipped for files larger than this unless overridden.
pub const DEFAULT_SIZE_LIMIT: u64 = 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotOptions {
    pub root: PathBuf,
    pub ignore_file: String,
    pub output_file: String,
    pub structure_file: String,
    pub ignore_patterns: Vec<String>,
    pub file_size_limit: Option<u64>,
    pub follow_links: bool,
}
impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_file: IGNORE_FILE.to_string(),
            output_file: OUTPUT_FILE.to_string(),
            structure_file: STRUCTURE_FILE.to_string(),
            ignore_patterns: Vec::new(),
            file_size_limit: Some(DEFAULT_SIZE_LIMIT),
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    options: SnapshotOptions,
}
impl SnapshotBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapshotOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.options.ignore_file = name.into();
        self
    }
    pub fn output_file(mut self, name: impl Into<String>) -> Self {
        self.options.output_file = name.into();
        self
    }
    pub fn structure_file(mut self, name: impl Into<String>) -> Self {
        self.options.structure_file = name.into();
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> SnapshotOptions {
        self.options
    }
}
