use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, EntryOrder, LogLevel};

/// Prints the directory tree below the root as marker-indented lines.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory name to leave out, given as NAME=VALUE; only VALUE is used
    #[arg(value_name = "NAME=VALUE")]
    pub exclude: Option<String>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The directory to scan
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Order of the entries within each directory
    #[clap(long, short, default_value = "name", value_enum)]
    pub order: EntryOrder,

    /// When to paint directory names
    #[clap(long, short, default_value = "never", value_enum)]
    pub color: ColorChoice,
}
