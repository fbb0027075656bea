use clap::ValueEnum;
use derive_more::Display;

/// How the finished tree is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum OutputFormat {
    /// Pretty-printed JSON, two-space indentation
    #[default]
    #[display("json")]
    Json,
    /// Single-line JSON
    #[display("json-compact")]
    JsonCompact,
    /// Box-drawing text tree
    #[display("tree")]
    Tree,
}

/// How the path list is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum InputFormat {
    /// One raw path per line
    #[default]
    #[display("lines")]
    Lines,
    /// A JSON array of strings
    #[display("json")]
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum ColorChoice {
    #[default]
    #[display("auto")]
    Auto,
    #[display("always")]
    Always,
    #[display("never")]
    Never,
}

impl ColorChoice {
    /// Resolves the choice for a given destination. `Auto` only colours a
    /// terminal stdout.
    pub fn enabled(self, writes_to_stdout: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                writes_to_stdout && supports_color::on(supports_color::Stream::Stdout).is_some()
            }
        }
    }
}
