use derive_more::IsVariant;
use hashlink::LinkedHashMap;

/// Children of a directory, keyed by entry name in insertion order.
pub type Children = LinkedHashMap<String, Entry>;

/// A node of the scanned filesystem tree.
///
/// The node's name is not stored here; it is the key under which the node
/// sits in its parent's [`Children`].
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Entry {
    Directory(Children),
    File { extension: Option<String> },
}

impl Entry {
    /// Returns the children of a directory node, `None` for files.
    pub fn children(&self) -> Option<&Children> {
        match self {
            Entry::Directory(children) => Some(children),
            Entry::File { .. } => None,
        }
    }

    /// Counts `(directories, files)` below this node, excluding the node itself.
    pub fn count_descendants(&self) -> (usize, usize) {
        let Some(children) = self.children() else {
            return (0, 0);
        };

        children
            .values()
            .fold((0, 0), |(directories, files), child| match child {
                Entry::Directory(_) => {
                    let (sub_directories, sub_files) = child.count_descendants();
                    (directories + 1 + sub_directories, files + sub_files)
                }
                Entry::File { .. } => (directories, files + 1),
            })
    }
}

#[cfg(test)]
impl Entry {
    pub fn empty_directory() -> Self {
        Entry::Directory(Children::new())
    }

    /// Inserts a child, keeping the position of an existing key.
    ///
    /// Returns `false` when the node is a file and cannot hold children.
    #[must_use]
    pub fn insert_child(&mut self, name: String, child: Entry) -> bool {
        match self {
            Entry::Directory(children) => {
                children.replace(name, child);
                true
            }
            Entry::File { .. } => false,
        }
    }
}

/// Splits a file name into its stem and extension on the first two `.` segments.
///
/// `archive.tar.gz` yields `("archive", Some("tar"))`; anything after the
/// second dot is dropped. A name without a dot has no extension.
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    let mut segments = name.split('.');
    let stem = segments.next().unwrap_or_default();
    (stem, segments.next())
}
