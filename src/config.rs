use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;

use crate::error::{MediaError, Result};
use crate::output::OutputFormat;

const FORMAT_ENV: &str = "TWMEDIA_FORMAT";
const DEFAULT_MAX_WIDTH: usize = 60;
const MIN_MAX_WIDTH: usize = 8;

#[derive(Deserialize, Default, Debug, PartialEq)]
pub struct Config {
    pub format: Option<String>,
    pub max_width: Option<usize>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        debug!("loading config from {}", config_path.display());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| MediaError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| MediaError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "twmedia")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(MediaError::NoConfigDir)
    }

    /// Get output format with env var taking precedence over config file
    pub fn output_format(&self) -> Result<OutputFormat> {
        let from_env = std::env::var(FORMAT_ENV).ok();
        Self::resolve_format(pick_format(from_env.as_deref(), self.format.as_deref()))
    }

    fn resolve_format(value: Option<&str>) -> Result<OutputFormat> {
        match value {
            None => Ok(OutputFormat::Table),
            Some(value) => value.parse(),
        }
    }

    pub fn max_width(&self) -> usize {
        self.max_width
            .unwrap_or(DEFAULT_MAX_WIDTH)
            .max(MIN_MAX_WIDTH)
    }
}

fn pick_format<'a>(env: Option<&'a str>, file: Option<&'a str>) -> Option<&'a str> {
    env.or(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str("format = \"json\"\nmax_width = 30\n").unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.max_width(), 30);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_width(), DEFAULT_MAX_WIDTH);
        assert_eq!(Config::resolve_format(None).unwrap(), OutputFormat::Table);
    }

    #[test]
    fn test_max_width_floor() {
        let config = Config {
            format: None,
            max_width: Some(2),
        };
        assert_eq!(config.max_width(), MIN_MAX_WIDTH);
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(Config::resolve_format(Some("JSON")).unwrap(), OutputFormat::Json);
        assert!(matches!(
            Config::resolve_format(Some("yaml")),
            Err(MediaError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_env_format_overrides_file() {
        assert_eq!(pick_format(Some("json"), Some("table")), Some("json"));
        assert_eq!(pick_format(None, Some("table")), Some("table"));
        assert_eq!(pick_format(None, None), None);
    }

    #[test]
    fn test_invalid_env_format_is_not_masked_by_file() {
        let result = Config::resolve_format(pick_format(Some("yaml"), Some("json")));
        assert!(matches!(result, Err(MediaError::InvalidFormat(value)) if value == "yaml"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let path = std::env::temp_dir().join("twmedia-missing-config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let path = std::env::temp_dir().join(format!("twmedia-config-{}.toml", std::process::id()));
        std::fs::write(&path, "max_width = \"wide\"").unwrap();

        let result = Config::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(MediaError::ConfigParse { .. })));
    }
}
