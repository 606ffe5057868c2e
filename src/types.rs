use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single text file retained for the content section of a snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scanned root.
    pub path: PathBuf,
    /// The full content of the file.
    ///
    /// Files detected as binary, empty, or over the size limit never become
    /// entries; they are listed in the tree only.
    pub content: String,
}

/// The complete result of one snapshot run.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// A visual tree representation of the retained directory structure,
    /// children sorted by name with directories and files intermixed.
    pub tree: String,
    /// Retained text files in filesystem traversal order.
    ///
    /// This order is unsorted and may differ from the sorted order used by
    /// the tree diagram.
    pub files: Vec<FileEntry>,
}
