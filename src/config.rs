//! Configuration for wttrfetch sources.
//!
//! The configuration file is a list of source records:
//!
//! ```json
//! [
//!   {
//!     "URL": "https://wttr.in/pune_0tqp0.png",
//!     "Output": "pune.png",
//!     "IgnoreHashes": []
//!   }
//! ]
//! ```
//!
//! JSON is the default format. Files ending in `.yaml` or `.yml` are read
//! as YAML with the same keys.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::SourceDescriptor;

/// Extension appended to the executable name for the default config path
pub const DEFAULT_CONFIG_EXTENSION: &str = "json";

/// Source used by the generated sample configuration
pub const SAMPLE_URL: &str = "https://wttr.in/pune_0tqp0.png";

/// Errors reading or creating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Failed to write sample config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize sample config: {0}")]
    Serialize(#[from] FormatError),
}

/// Decode/encode failure in either supported format
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialization format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format of `path` (JSON unless the extension says YAML)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// Result of asking for a sample configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    Created,
    AlreadyExists,
}

/// Default config path: the executable path as invoked, plus `.json`
pub fn default_config_path() -> PathBuf {
    let exe = std::env::args_os()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_PKG_NAME")));

    let mut path = exe.into_os_string();
    path.push(".");
    path.push(DEFAULT_CONFIG_EXTENSION);
    PathBuf::from(path)
}

/// Decode a list of sources from text
pub fn parse_sources(
    content: &str,
    format: ConfigFormat,
) -> Result<Vec<SourceDescriptor>, FormatError> {
    let sources = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(sources)
}

/// Encode a list of sources as text
pub fn render_sources(
    sources: &[SourceDescriptor],
    format: ConfigFormat,
) -> Result<String, FormatError> {
    let content = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(sources)?,
        ConfigFormat::Yaml => serde_yaml::to_string(sources)?,
    };
    Ok(content)
}

/// Load and decode the source list at `path`
pub fn load_sources(path: &Path) -> Result<Vec<SourceDescriptor>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_sources(&content, ConfigFormat::from_path(path)).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Sources written by `write_sample`
pub fn sample_sources() -> Vec<SourceDescriptor> {
    vec![SourceDescriptor::new(SAMPLE_URL, "pune.png")]
}

/// Write a sample configuration to `path` unless a file is already there
pub fn write_sample(path: &Path) -> Result<SampleStatus, ConfigError> {
    let content = render_sources(&sample_sources(), ConfigFormat::from_path(path))?;

    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Ok(SampleStatus::AlreadyExists)
        }
        Err(e) => return Err(write_err(e)),
    };

    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;

    Ok(SampleStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_sources() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wttrfetch.json");
        std::fs::write(
            &path,
            r#"[
  {"URL": "https://wttr.in/pune.png", "Output": "pune.png", "IgnoreHashes": ["aa", "bb"]},
  {"URL": "https://wttr.in/oslo.png", "Output": "/tmp/oslo.png", "IgnoreHashes": []}
]"#,
        )
        .unwrap();

        let sources = load_sources(&path).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].ignore_hashes, vec!["aa", "bb"]);
        assert_eq!(sources[1].output, PathBuf::from("/tmp/oslo.png"));
        assert!(sources[1].ignore_hashes.is_empty());
    }

    #[test]
    fn test_load_yaml_sources() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sources.yaml");
        std::fs::write(
            &path,
            r#"
- URL: https://wttr.in/pune.png
  Output: pune.png
  IgnoreHashes:
    - abc
"#,
        )
        .unwrap();

        let sources = load_sources(&path).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].url, "https://wttr.in/pune.png");
        assert_eq!(sources[0].ignore_hashes, vec!["abc"]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load_sources(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, r#"{"URL": "not a list"}"#).unwrap();

        let err = load_sources(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Parse {
                source: FormatError::Json(_),
                ..
            }
        ));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_malformed_yaml_keeps_yaml_cause() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yaml");
        std::fs::write(&path, "- URL: [unterminated\n").unwrap();

        assert!(matches!(
            load_sources(&path).unwrap_err(),
            ConfigError::Parse {
                source: FormatError::Yaml(_),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.json");
        std::fs::write(&path, r#"[{"Output": "pune.png"}]"#).unwrap();

        assert!(matches!(
            load_sources(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("wttrfetch")), ConfigFormat::Json);
    }

    #[test]
    fn test_sample_round_trips_through_loader() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sample.json");

        assert_eq!(write_sample(&path).unwrap(), SampleStatus::Created);
        assert_eq!(load_sources(&path).unwrap(), sample_sources());
    }

    #[test]
    fn test_yaml_sample_round_trips_through_loader() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sample.yml");

        write_sample(&path).unwrap();
        assert_eq!(load_sources(&path).unwrap(), sample_sources());
    }

    #[test]
    fn test_sample_does_not_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.json");
        std::fs::write(&path, "[]").unwrap();

        assert_eq!(write_sample(&path).unwrap(), SampleStatus::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_default_config_path_ends_with_json() {
        let path = default_config_path();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }
}
