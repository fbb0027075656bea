use std::io::Read as _;
use std::path::PathBuf;

use compio::fs;
use derive_more::Display;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::application::data::InputFormat;

/// Where the raw path list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PathSource {
    #[display("<stdin>")]
    Stdin,
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl PathSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => PathSource::File(path),
            _ => PathSource::Stdin,
        }
    }

    pub async fn read_to_string(&self) -> Result<String, PathSourceError> {
        match self {
            PathSource::Stdin => {
                // Read once up front, before any other I/O is in flight on the runtime.
                let mut contents = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut contents)
                    .context(ReadSnafu {
                        source_name: self.to_string(),
                    })?;
                Ok(contents)
            }
            PathSource::File(path) => {
                let bytes = fs::read(path).await.context(ReadSnafu {
                    source_name: self.to_string(),
                })?;
                debug!("Read {} bytes from {}", bytes.len(), self);
                String::from_utf8(bytes).context(Utf8Snafu {
                    source_name: self.to_string(),
                })
            }
        }
    }
}

/// Splits the input into raw paths. Blank lines are kept here and skipped by
/// the tree builder.
pub fn parse_paths(contents: &str, format: InputFormat) -> Result<Vec<String>, PathSourceError> {
    match format {
        InputFormat::Lines => Ok(contents.lines().map(str::to_string).collect()),
        InputFormat::Json => serde_json::from_str(contents).context(JsonSnafu),
    }
}

#[derive(Debug, Snafu)]
pub enum PathSourceError {
    #[snafu(display("Failed to read paths from {}", source_name))]
    ReadError {
        source_name: String,
        source: std::io::Error,
    },
    #[snafu(display("Paths read from {} are not valid UTF-8", source_name))]
    Utf8Error {
        source_name: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("JSON input should be an array of strings"))]
    JsonError { source: serde_json::Error },
}
