use std::path::{Path, PathBuf};

use derive_more::{Display, From};
use hashlink::LinkedHashMap;

/// Kind of a filesystem entry described by a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum EntryKind {
    #[display("Directory")]
    Directory,
    #[display("File")]
    File,
}

/// A single node of a layout tree
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum LayoutNode {
    File,
    #[from]
    Directory(Directory),
}

impl LayoutNode {
    pub fn kind(&self) -> EntryKind {
        match self {
            LayoutNode::File => EntryKind::File,
            LayoutNode::Directory(_) => EntryKind::Directory,
        }
    }
}

/// Number of directories and files a layout describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("{directories} directories, {files} files")]
pub struct LayoutCounts {
    pub directories: usize,
    pub files: usize,
}

/// Children of a directory, kept in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    children: LinkedHashMap<String, LayoutNode>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.insert(name, LayoutNode::File);
        self
    }

    pub fn with_directory(mut self, name: impl Into<String>, directory: Directory) -> Self {
        self.insert(name, directory);
        self
    }

    /// Inserts a child, returning the node it replaced.
    /// A replaced entry keeps its original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: impl Into<LayoutNode>,
    ) -> Option<LayoutNode> {
        self.children.replace(name.into(), node.into())
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&LayoutNode> {
        self.children.get(name.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LayoutNode)> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts every directory and file below this one, recursively
    pub fn counts(&self) -> LayoutCounts {
        self.iter()
            .fold(LayoutCounts::default(), |mut acc, (_, node)| {
                match node {
                    LayoutNode::File => acc.files += 1,
                    LayoutNode::Directory(directory) => {
                        let nested = directory.counts();
                        acc.directories += 1 + nested.directories;
                        acc.files += nested.files;
                    }
                }
                acc
            })
    }

    /// Every path derivable from this directory, relative to it.
    /// Parents are listed before their children.
    pub fn relative_paths(&self) -> Vec<(PathBuf, EntryKind)> {
        let mut paths = Vec::new();
        self.collect_paths(Path::new(""), &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &Path, paths: &mut Vec<(PathBuf, EntryKind)>) {
        for (name, node) in self.iter() {
            let path = prefix.join(name);
            paths.push((path.clone(), node.kind()));
            if let LayoutNode::Directory(directory) = node {
                directory.collect_paths(&path, paths);
            }
        }
    }
}
