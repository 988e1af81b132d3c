use clap::ValueEnum;
use derive_more::Display;

/// Order in which the entries of each directory are placed in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum EntryOrder {
    /// Whatever order the operating system lists them in.
    Listing,
    /// Sorted by raw entry name, byte-wise.
    #[default]
    Name,
}
