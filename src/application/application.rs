use std::io::Write as _;
use std::path::Path;

use compio::fs;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::data::OutputFormat;
use crate::application::{PathSourceError, RuntimeConfig, parse_paths};
use crate::cli::Cli;
use crate::config::{Settings, SettingsError};
use crate::filesystem::{FilesystemNode, MAX_RENDER_DEPTH};

pub struct Application;

impl Application {
    pub async fn run(cli: Cli) -> Result<(), ApplicationError> {
        let settings = Settings::read(&cli.root).await.context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        let config = RuntimeConfig::resolve(cli, settings);
        debug!("Resolved runtime config: {:?}", config);

        let contents = config.input.read_to_string().await.context(InputSnafu)?;
        let paths = parse_paths(&contents, config.input_format).context(InputSnafu)?;
        info!("Read {} raw paths from {}", paths.len(), config.input);

        let tree = FilesystemNode::from_string_paths(&paths);

        let color = config.use_color();
        if color {
            colored::control::set_override(true);
        }
        let rendered = render(&tree, config.format, color).context(RenderSnafu)?;

        Self::write_output(rendered, config.output.as_deref()).await
    }

    async fn write_output(rendered: String, output: Option<&Path>) -> Result<(), ApplicationError> {
        match output {
            Some(path) => {
                let result = fs::write(path, rendered.into_bytes()).await;
                result.0.context(WriteSnafu {
                    file_path: path.display().to_string(),
                })?;
                info!("Wrote tree to {}", path.display());
            }
            None => {
                std::io::stdout()
                    .lock()
                    .write_all(rendered.as_bytes())
                    .context(StdoutSnafu)?;
            }
        }
        Ok(())
    }
}

/// Formats a tree for output. JSON variants end with a newline, like the text
/// tree does. Trees deeper than [`MAX_RENDER_DEPTH`] are refused rather than
/// handed to the recursive writers.
pub fn render(
    tree: &FilesystemNode,
    format: OutputFormat,
    color: bool,
) -> Result<String, RenderError> {
    let depth = tree.depth();
    ensure!(
        depth <= MAX_RENDER_DEPTH,
        TooDeepSnafu {
            depth,
            limit: MAX_RENDER_DEPTH,
        }
    );

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(tree).context(JsonSnafu)? + "\n",
        OutputFormat::JsonCompact => serde_json::to_string(tree).context(JsonSnafu)? + "\n",
        OutputFormat::Tree => tree.render_tree(color),
    };
    Ok(rendered)
}

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("Tree is {} levels deep, only {} can be rendered", depth, limit))]
    TooDeepError { depth: usize, limit: usize },
    #[snafu(display("Failed to serialize the tree"))]
    JsonError { source: serde_json::Error },
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Critical failure encountered while reading the path list"))]
    InputError { source: PathSourceError },
    #[snafu(display("Failed to render the tree"))]
    RenderError { source: RenderError },
    #[snafu(display("Failed to write the tree to {}", file_path))]
    WriteError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write the tree to stdout"))]
    StdoutError { source: std::io::Error },
}
