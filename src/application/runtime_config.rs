use std::path::PathBuf;

use crate::application::data::{ColorChoice, EntryOrder};
use crate::cli::{Cli, exclusion_from_argument};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub exclude: Option<String>,
    pub order: EntryOrder,
    pub color: ColorChoice,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            exclude: cli.exclude.as_deref().and_then(exclusion_from_argument),
            order: cli.order,
            color: cli.color,
        }
    }
}
