use std::path::Path;

use snafu::{ResultExt, Snafu};
use tracing::{debug, info, trace};

use crate::application::data::EntryOrder;
use crate::ext::AbsolutePathExt;
use crate::filesystem::{Children, Entry, Filesystem, FilesystemError, split_file_name};

/// Builds an [`Entry`] tree by recursively listing a directory.
pub struct TreeBuilder<'a, F: Filesystem> {
    filesystem: &'a F,
    exclude: Option<&'a str>,
    order: EntryOrder,
}

impl<'a, F: Filesystem> TreeBuilder<'a, F> {
    pub fn new(filesystem: &'a F) -> Self {
        Self {
            filesystem,
            exclude: None,
            order: EntryOrder::default(),
        }
    }

    /// Skips every directory whose base name equals `name`, at any depth.
    pub fn exclude(mut self, name: Option<&'a str>) -> Self {
        self.exclude = name;
        self
    }

    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    /// Scans `path` and returns it as a directory node holding its descendants.
    pub fn build(&self, path: &Path) -> Result<Entry, TreeBuildError> {
        debug!(
            "Building tree from {} (exclude: {:?}, order: {})",
            path.absolute_display(),
            self.exclude,
            self.order
        );

        let root = self.read_directory(path)?;

        let (directories, files) = root.count_descendants();
        info!("Scanned {} directories and {} files", directories, files);
        Ok(root)
    }

    fn read_directory(&self, path: &Path) -> Result<Entry, TreeBuildError> {
        trace!("Scanning directory {}", path.display());
        let mut raw_names = self
            .filesystem
            .list_directory(path)
            .context(FilesystemSnafu)?;

        if self.order == EntryOrder::Name {
            raw_names.sort_unstable();
        }

        let mut children = Children::new();
        for raw_name in raw_names {
            let entry_path = path.join(&raw_name);
            let name = raw_name.to_string_lossy();
            let stat = self
                .filesystem
                .stat_entry(&entry_path)
                .context(FilesystemSnafu)?;

            let (key, child) = if stat.is_directory {
                if self.is_excluded(&name) {
                    debug!("Skipping excluded directory {}", entry_path.display());
                    continue;
                }
                (name.to_string(), self.read_directory(&entry_path)?)
            } else {
                let (stem, extension) = split_file_name(&name);
                let file = Entry::File {
                    extension: extension.map(str::to_string),
                };
                (stem.to_string(), file)
            };

            if children.replace(key, child).is_some() {
                debug!("{} replaced an earlier entry with the same key", entry_path.display());
            }
        }

        Ok(Entry::Directory(children))
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.is_some_and(|exclude| exclude == name)
    }
}

#[derive(Debug, Snafu)]
pub enum TreeBuildError {
    #[snafu(display("Failed to scan the directory tree"))]
    FilesystemError { source: FilesystemError },
}
