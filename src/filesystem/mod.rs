//! Filesystem tree representation and the scanner that produces it.
//!
//! A scan lists a root directory recursively through the [`Filesystem`]
//! trait and mirrors it as nested [`Entry`] nodes, where directories map
//! child names to nodes and files are leaves keyed by their stem.

mod builder;
mod host;
mod tree;

pub use builder::{TreeBuildError, TreeBuilder};
pub use host::{EntryStat, Filesystem, FilesystemError, HostFilesystem};
pub use tree::{Children, Entry, split_file_name};
