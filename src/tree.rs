//! Hierarchical project tree and its box-drawing rendering.

use std::collections::BTreeMap;
use std::path::Path;

/// A tree node: a directory with named children, or a file leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(BTreeMap<String, Node>),
    File,
}

impl Node {
    fn dir() -> Self {
        Node::Directory(BTreeMap::new())
    }
}

/// The retained directory hierarchy for one scan.
///
/// Insertion order does not matter; rendering always iterates children in
/// name order, directories and files intermixed.
#[derive(Debug, Default)]
pub struct FileTree {
    root_name: String,
    children: BTreeMap<String, Node>,
}

impl FileTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            children: BTreeMap::new(),
        }
    }

    /// Ensures a directory node exists for the given root-relative path,
    /// creating intermediate directories on demand.
    pub fn insert_dir(&mut self, rel: &Path) {
        level_for(&mut self.children, rel);
    }

    /// Records a file leaf at the given root-relative path.
    pub fn insert_file(&mut self, rel: &Path) {
        let Some(name) = rel.file_name() else {
            return;
        };
        let parent = rel.parent().unwrap_or_else(|| Path::new(""));
        let level = level_for(&mut self.children, parent);
        level
            .entry(name.to_string_lossy().into_owned())
            .or_insert(Node::File);
    }

    /// Renders the tree with box-drawing connectors. The root carries no
    /// connector and is suffixed with `/`, like every directory name.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("{}/", self.root_name)];
        render_level(&self.children, "", &mut lines);
        lines.join("\n")
    }
}

fn level_for<'a>(
    mut current: &'a mut BTreeMap<String, Node>,
    rel: &Path,
) -> &'a mut BTreeMap<String, Node> {
    for segment in rel.components() {
        let name = segment.as_os_str().to_string_lossy().into_owned();
        let node = current.entry(name).or_insert_with(Node::dir);
        // A name can only collide across kinds if the filesystem changed
        // between passes; the directory wins.
        if matches!(node, Node::File) {
            *node = Node::dir();
        }
        current = match node {
            Node::Directory(children) => children,
            Node::File => unreachable!(),
        };
    }
    current
}

fn render_level(children: &BTreeMap<String, Node>, prefix: &str, lines: &mut Vec<String>) {
    let count = children.len();
    for (i, (name, node)) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        match node {
            Node::Directory(grandchildren) => {
                lines.push(format!("{prefix}{connector}{name}/"));
                let extended = format!("{prefix}{}", if is_last { "    " } else { "│   " });
                render_level(grandchildren, &extended, lines);
            }
            Node::File => lines.push(format!("{prefix}{connector}{name}")),
        }
    }
}
