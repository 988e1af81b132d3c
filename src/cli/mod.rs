mod cli;
mod exclusion;

pub use cli::Cli;
pub use exclusion::exclusion_from_argument;
