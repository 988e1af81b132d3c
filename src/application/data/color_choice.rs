use clap::ValueEnum;
use derive_more::Display;
use supports_color::Stream;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum ColorChoice {
    Auto,
    Always,
    #[default]
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` by probing whether stdout supports colors.
    pub fn should_colorize(&self) -> bool {
        match self {
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
