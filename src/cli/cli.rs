use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, InputFormat, LogLevel, OutputFormat};

/// Turns a flat list of paths into a sorted directory tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File with the path list; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    #[clap(long, short, value_enum)]
    pub input_format: Option<InputFormat>,

    #[clap(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    #[clap(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Write the result here instead of stdout
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Directory searched for pathtree.yaml
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
