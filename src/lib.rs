//! # Projsnap
//!
//! `projsnap` is a library for documenting a project directory: it walks the
//! tree, filters files by extension and `.projectignore` rules, builds a
//! hierarchical representation, and renders Markdown with a box-drawing tree
//! diagram and, optionally, every retained file's content in fenced blocks.
//!
//! Two traversals happen per run. The tree pass prunes ignored directories,
//! records retained directories and files, and renders children in name
//! order. The content pass yields eligible files in traversal order, skipping
//! anything over the size limit, empty, or not detected as text.
//!
//! # Example
//!
//! ```no_run
//! use projsnap::{SnapshotBuilder, output, snapshot};
//!
//! let options = SnapshotBuilder::new(".")
//!     .file_size_limit(Some(1024 * 1024))
//!     .build();
//! let output_file = options.root.join(&options.output_file);
//! let structure_file = options.root.join(&options.structure_file);
//!
//! let result = snapshot(options).expect("failed to scan directory");
//!
//! println!("Directory tree:\n{}", result.tree);
//! output::write_markdown(&result, output_file).expect("write failed");
//! output::write_structure_only(&result, structure_file).expect("write failed");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod rules;
mod tree;
mod types;

pub use engine::snapshot;
pub use error::SnapshotError;
pub use options::{
    DEFAULT_SIZE_LIMIT, IGNORE_FILE, OUTPUT_FILE, STRUCTURE_FILE, SnapshotBuilder, SnapshotOptions,
};
pub use rules::{IgnoreRules, RECOGNIZED_EXTENSIONS};
pub use tree::{FileTree, Node};
pub use types::{FileEntry, Snapshot};
