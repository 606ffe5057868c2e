use crate::error::SnapshotError;
use crate::options::SnapshotOptions;
use crate::rules::IgnoreRules;
use crate::tree::FileTree;
use crate::types::{FileEntry, Snapshot};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &SnapshotOptions, rules: &IgnoreRules) -> Result<Self, SnapshotError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    SnapshotError::Pattern(format!("invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(glob_builder.build().map_err(|e| {
                SnapshotError::Pattern(format!("failed to build glob set: {}", e))
            })?)
        } else {
            None
        };
        // Prune rather than post-filter: ignored directories are never
        // descended into, so their subtrees cost nothing and inaccessible
        // trees are never touched.
        let rules = rules.clone();
        let root = root.to_path_buf();
        builder.filter_entry(move |entry| {
            if entry.path() == root {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir && rules.is_ignored_dir(&entry.file_name().to_string_lossy()) {
                return false;
            }
            if let Some(ref matcher) = matcher {
                if matcher.is_match(entry.path()) {
                    return false;
                }
            }
            true
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => Some(entry.path().to_path_buf()),
            Err(e) => {
                tracing::warn!("walk error: {}", e);
                None
            }
        })
    }
}

/// Builds a snapshot of the directory configured in `options`.
///
/// Runs two traversals: one building the sorted tree diagram, one collecting
/// file contents in traversal order. Per-file I/O errors are logged and the
/// file is skipped.
pub fn snapshot(options: SnapshotOptions) -> Result<Snapshot, SnapshotError> {
    let root = options
        .root
        .canonicalize()
        .map_err(|e| SnapshotError::io(&options.root, e))?;
    tracing::debug!("building snapshot of {}", root.display());
    let rules = IgnoreRules::load(
        &root,
        &options.ignore_file,
        &[&options.output_file, &options.structure_file],
    )?;
    let tree = build_tree(&root, &options, &rules)?.render();
    let files = collect_contents(&root, &options, &rules)?;
    Ok(Snapshot { tree, files })
}

fn build_tree(
    root: &Path,
    options: &SnapshotOptions,
    rules: &IgnoreRules,
) -> Result<FileTree, SnapshotError> {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    let mut tree = FileTree::new(root_name);
    for path in Walker::new(root, options, rules)?.into_iter() {
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }
        if path.is_dir() {
            // Retained directories get a node even when childless.
            tree.insert_dir(rel);
        } else if file_name_included(rel, rules) {
            tree.insert_file(rel);
        }
    }
    Ok(tree)
}

fn collect_contents(
    root: &Path,
    options: &SnapshotOptions,
    rules: &IgnoreRules,
) -> Result<Vec<FileEntry>, SnapshotError> {
    // The output paths are excluded outright; a half-written previous run
    // must never feed back into this one.
    let output_paths = [
        root.join(&options.output_file),
        root.join(&options.structure_file),
    ];
    let mut files = Vec::new();
    for path in Walker::new(root, options, rules)?.into_iter() {
        if path.is_dir() || output_paths.contains(&path) {
            continue;
        }
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        if !file_name_included(rel, rules) {
            continue;
        }
        match read_content(&path, options.file_size_limit) {
            Ok(Some(content)) => files.push(FileEntry {
                path: rel.to_path_buf(),
                content,
            }),
            Ok(None) => {}
            Err(e) => tracing::warn!("skipping {}: {}", path.display(), e),
        }
    }
    Ok(files)
}

fn file_name_included(rel: &Path, rules: &IgnoreRules) -> bool {
    rel.file_name()
        .is_some_and(|n| rules.includes_file(&n.to_string_lossy()))
}

/// Reads a candidate file, returning `None` when it should be left out of
/// the content section: over the size limit, empty, or not text.
fn read_content(path: &Path, size_limit: Option<u64>) -> Result<Option<String>, SnapshotError> {
    if let Some(limit) = size_limit {
        let metadata = fs::metadata(path).map_err(|e| SnapshotError::io(path, e))?;
        if metadata.len() > limit {
            tracing::debug!(
                "file too large ({} > {}), skipping content: {}",
                metadata.len(),
                limit,
                path.display()
            );
            return Ok(None);
        }
    }
    let file = File::open(path).map_err(|e| SnapshotError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(1024);
    let _ = reader
        .by_ref()
        .take(1024)
        .read_to_end(&mut bytes)
        .map_err(|e| SnapshotError::io(path, e))?;
    if String::from_utf8_lossy(&bytes)
        .chars()
        .all(char::is_whitespace)
    {
        tracing::debug!("empty file, skipping content: {}", path.display());
        return Ok(None);
    }
    if content_inspector::inspect(&bytes).is_binary() {
        tracing::debug!("binary file, skipping content: {}", path.display());
        return Ok(None);
    }
    // Read the rest as bytes and decode once: a multibyte character split at
    // the probe boundary must not corrupt the remainder.
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| SnapshotError::io(path, e))?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
