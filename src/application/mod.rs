mod application;
pub mod data;
mod path_source;
mod runtime_config;

pub use application::{Application, ApplicationError, RenderError, render};
pub use path_source::{PathSource, PathSourceError, parse_paths};
pub use runtime_config::RuntimeConfig;
