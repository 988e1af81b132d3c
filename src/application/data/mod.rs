mod color_choice;
mod entry_order;
mod log_level;

pub use color_choice::ColorChoice;
pub use entry_order::EntryOrder;
pub use log_level::LogLevel;
