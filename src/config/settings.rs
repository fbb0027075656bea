use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::application::data::{ColorChoice, InputFormat, OutputFormat};

pub const SETTINGS_FILE_NAME: &str = "pathtree.yaml";

fn get_settings_file_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE_NAME)
}

/// Defaults read from `pathtree.yaml`. Every field is optional; command line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: Option<OutputFormat>,
    pub input_format: Option<InputFormat>,
    pub color: Option<ColorChoice>,
}

impl Settings {
    /// Reads the settings file from `root`, falling back to defaults when there is none.
    pub async fn read(root: &Path) -> Result<Self, SettingsError> {
        let path = get_settings_file_path(root);
        match Self::from_path(path.clone()).await {
            Err(SettingsError::ReadError { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, SettingsError> {
        debug!("Reading settings file: {}", path.display());
        let bytes = fs::read(&path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read settings file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(Utf8Snafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    fn parse_value<T: ValueEnum>(key: &str, value: &Yaml) -> Result<Option<T>, SettingsError> {
        if let Yaml::Value(Scalar::Null) = value {
            return Ok(None);
        }
        let raw = value.as_str().context(InvalidValueSnafu {
            key,
            value: format!("{value:?}"),
        })?;
        T::from_str(raw, true)
            .map(Some)
            .map_err(|_| SettingsError::InvalidValue {
                key: key.to_string(),
                value: raw.to_string(),
            })
    }

    fn from_mapping(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        for (key, value) in top_level {
            let Yaml::Value(Scalar::String(key)) = key else {
                debug!("Skipping non-string settings key: {:?}", key);
                continue;
            };
            match key.as_ref() {
                "format" => settings.format = Self::parse_value(key, value)?,
                "input_format" => settings.input_format = Self::parse_value(key, value)?,
                "color" => settings.color = Self::parse_value(key, value)?,
                other => debug!("Ignoring unknown settings key '{}'", other),
            }
        }
        Ok(settings)
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let Some(document) = documents.first() else {
            return Ok(Self::default());
        };

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;
        Self::from_mapping(top_level)
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The settings file {} is not valid UTF-8", file_path))]
    Utf8Error {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Invalid value '{}' for settings key '{}'", value, key))]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn parses_all_known_keys() {
        let yaml = "format: tree\ninput_format: json\ncolor: never\n";
        let settings: Settings = yaml.try_into().unwrap();
        assert_eq!(
            settings,
            Settings {
                format: Some(OutputFormat::Tree),
                input_format: Some(InputFormat::Json),
                color: Some(ColorChoice::Never),
            }
        );
    }

    #[test]
    fn values_are_case_insensitive() {
        let settings: Settings = "format: JSON-Compact".try_into().unwrap();
        assert_eq!(settings.format, Some(OutputFormat::JsonCompact));
    }

    #[test]
    fn empty_document_means_defaults() {
        let settings: Settings = "".try_into().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn null_values_are_unset() {
        let settings: Settings = "format: ~\ncolor: always".try_into().unwrap();
        assert_eq!(settings.format, None);
        assert_eq!(settings.color, Some(ColorChoice::Always));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings: Settings = "indent: 4\n42: answer\nformat: tree".try_into().unwrap();
        assert_eq!(settings.format, Some(OutputFormat::Tree));
    }

    #[test]
    fn returns_error_on_invalid_yaml() {
        let result: Result<Settings, _> = "invalid: yaml: content: [unclosed".try_into();
        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }

    #[test]
    fn returns_error_when_top_level_is_not_map() {
        let result: Result<Settings, _> = "- tree\n- json".try_into();
        assert!(matches!(result, Err(SettingsError::TopLevelNotMap)));
    }

    #[test]
    fn returns_error_on_unknown_value() {
        let result: Result<Settings, _> = "format: xml".try_into();
        match result {
            Err(SettingsError::InvalidValue { key, value }) => {
                assert_eq!(key, "format");
                assert_eq!(value, "xml");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn returns_error_on_non_string_value() {
        let result: Result<Settings, _> = "color:\n  nested: map".try_into();
        assert!(matches!(result, Err(SettingsError::InvalidValue { .. })));
    }

    #[compio::test]
    async fn missing_file_means_defaults() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let settings = Settings::read(dir.path()).await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[compio::test]
    async fn reads_file_from_root() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "format: tree\n")
            .expect("Failed to write settings file");

        let settings = Settings::read(dir.path()).await.unwrap();
        assert_eq!(settings.format, Some(OutputFormat::Tree));
    }

    #[compio::test]
    async fn unreadable_settings_path_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir(dir.path().join(SETTINGS_FILE_NAME))
            .expect("Failed to create directory in place of settings file");

        let result = Settings::read(dir.path()).await;
        assert!(matches!(result, Err(SettingsError::ReadError { .. })));
    }

    #[compio::test]
    async fn invalid_utf8_settings_file_is_reported() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"format: tr\xffee\n")
            .expect("Failed to write to temp file");

        let result = Settings::from_path(file.path().to_path_buf()).await;
        match result {
            Err(SettingsError::Utf8Error { file_path, .. }) => {
                assert!(file_path.contains(&*file.path().to_string_lossy()));
            }
            other => panic!("Expected Utf8Error, got {other:?}"),
        }
    }

    #[compio::test]
    async fn from_path_reports_missing_file() {
        let result = Settings::from_path(PathBuf::from("nonexistent/pathtree.yaml")).await;
        assert!(matches!(result, Err(SettingsError::ReadError { .. })));
    }

    #[compio::test]
    async fn from_path_reads_named_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "input_format: json").expect("Failed to write to temp file");

        let settings = Settings::from_path(file.path().to_path_buf()).await.unwrap();
        assert_eq!(settings.input_format, Some(InputFormat::Json));
    }
}
