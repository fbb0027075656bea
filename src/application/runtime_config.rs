use std::path::PathBuf;

use crate::application::PathSource;
use crate::application::data::{ColorChoice, InputFormat, OutputFormat};
use crate::cli::Cli;
use crate::config::Settings;

/// Fully resolved options for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub input: PathSource,
    pub input_format: InputFormat,
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub output: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Command line flags win over the settings file, which wins over defaults.
    pub fn resolve(cli: Cli, settings: Settings) -> Self {
        Self {
            input: PathSource::from_arg(cli.input),
            input_format: cli.input_format.or(settings.input_format).unwrap_or_default(),
            format: cli.format.or(settings.format).unwrap_or_default(),
            color: cli.color.or(settings.color).unwrap_or_default(),
            output: cli.output,
        }
    }

    pub fn use_color(&self) -> bool {
        self.color.enabled(self.output.is_none())
    }
}
