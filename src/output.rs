//! Markdown and JSON rendering for snapshot results.
//!
//! The full document carries the fenced tree diagram followed by every
//! retained file's content in its own fenced, language-tagged block labeled
//! with its root-relative path. The structure-only document carries just the
//! fenced tree.

use crate::{Snapshot, SnapshotError};
use std::fs;
use std::path::Path;

/// Supported stdout formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Tree,
    Json,
}

/// Formats the snapshot into a string.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Markdown => format_markdown(snapshot),
        OutputFormat::Tree => format_structure_only(snapshot),
        OutputFormat::Json => format_json(snapshot, pretty),
    }
}

/// Writes the full Markdown document (tree plus contents), overwriting any
/// previous run's output.
pub fn write_markdown(snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    fs::write(&path, format_markdown(snapshot)).map_err(|e| SnapshotError::io(path.as_ref(), e))
}

/// Writes the structure-only Markdown document, overwriting any previous
/// run's output.
pub fn write_structure_only(
    snapshot: &Snapshot,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    fs::write(&path, format_structure_only(snapshot))
        .map_err(|e| SnapshotError::io(path.as_ref(), e))
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("# PROJECT STRUCTURE\n\n```\n");
    out.push_str(&snapshot.tree);
    if !snapshot.tree.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n# FILE CONTENTS\n\n");

    for file in &snapshot.files {
        let lang = language_for(&file.path);
        out.push_str(&format!("## {}\n\n```{}\n", file.path.display(), lang));
        out.push_str(&file.content);
        if !file.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("```\n\n");
    }
    out
}

fn format_structure_only(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("# PROJECT STRUCTURE\n\n```\n");
    out.push_str(&snapshot.tree);
    if !snapshot.tree.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

fn format_json(snapshot: &Snapshot, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(snapshot).expect("JSON serialization failed")
    } else {
        serde_json::to_string(snapshot).expect("JSON serialization failed")
    }
}

/// Picks the fence language tag for a file. Known extensions map to their
/// language name, unknown extensions are used as-is, and extensionless
/// dotfiles fall back to the name without the dot (`.env` becomes `env`).
fn language_for(path: &Path) -> String {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        return match ext {
            "rs" => "rust",
            "md" | "markdown" => "markdown",
            "txt" => "text",
            "htm" => "html",
            "js" | "mjs" | "cjs" => "javascript",
            "ts" | "tsx" => "typescript",
            "py" => "python",
            "sh" | "bash" => "bash",
            "yml" | "yaml" => "yaml",
            other => other,
        }
        .to_string();
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Some(stripped) = name.strip_prefix('.') {
        if !stripped.is_empty() {
            return stripped.to_string();
        }
    }
    "text".to_string()
}
