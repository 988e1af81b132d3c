use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};

use crate::ext::AbsolutePathExt;

/// Metadata the tree builder needs about a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub is_directory: bool,
}

/// Read-only filesystem operations used while building a tree.
pub trait Filesystem {
    /// Lists the raw names of a directory's immediate entries, in listing order.
    fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, FilesystemError>;
    fn stat_entry(&self, path: &Path) -> Result<EntryStat, FilesystemError>;
}

/// [`Filesystem`] backed by the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFilesystem;

impl Filesystem for HostFilesystem {
    fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, FilesystemError> {
        let context = ListDirectorySnafu {
            path: path.to_path_buf(),
        };

        fs::read_dir(path)
            .context(context.clone())?
            .map(|entry| {
                entry
                    .map(|entry| entry.file_name())
                    .context(context.clone())
            })
            .collect()
    }

    fn stat_entry(&self, path: &Path) -> Result<EntryStat, FilesystemError> {
        // Follows symlinks, so a link to a directory is scanned as one.
        let metadata = fs::metadata(path).context(StatSnafu {
            path: path.to_path_buf(),
        })?;

        Ok(EntryStat {
            is_directory: metadata.is_dir(),
        })
    }
}

#[derive(Debug, Snafu)]
pub enum FilesystemError {
    #[snafu(display("Failed to list directory {}", path.absolute_display()))]
    ListDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read metadata of {}", path.absolute_display()))]
    StatError {
        path: PathBuf,
        source: std::io::Error,
    },
}
