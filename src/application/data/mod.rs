mod formats;
mod log_level;

pub use formats::{ColorChoice, InputFormat, OutputFormat};
pub use log_level::LogLevel;
