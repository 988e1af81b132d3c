use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::filesystem::{HostFilesystem, TreeBuildError, TreeBuilder};
use crate::rendering::TreeRenderer;

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let colorize = app_config.color.should_colorize();
        if colorize {
            colored::control::set_override(true);
        }

        let rendered = Self::render_tree(&app_config, colorize)?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{rendered}").context(OutputSnafu)?;
        stdout.flush().context(OutputSnafu)?;

        Ok(())
    }

    /// Scans the configured root and renders it, without printing.
    pub fn render_tree(
        app_config: &RuntimeConfig,
        colorize: bool,
    ) -> Result<String, ApplicationError> {
        debug!("Excluding directory: {:?}", app_config.exclude);

        let tree = TreeBuilder::new(&HostFilesystem)
            .exclude(app_config.exclude.as_deref())
            .order(app_config.order)
            .build(&app_config.root)
            .context(TreeBuildSnafu)?;

        Ok(TreeRenderer::new().colorize(colorize).render(&tree))
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while building the tree"))]
    TreeBuildError { source: TreeBuildError },
    #[snafu(display("Failed to write the tree to stdout"))]
    OutputError { source: io::Error },
}
