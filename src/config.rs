// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime settings.
//!
//! Sources, highest precedence first: command-line flags, the
//! `WARD_HEALTH_DATA` environment variable (data path only), the YAML config
//! file, built-in defaults.
//!
//! ```yaml
//! # ward-health.yaml
//! data_path: data/urban_health_data.csv
//! language: ne
//! export_format: yaml
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::i18n::Lang;
use crate::report::ExportFormat;

pub const DEFAULT_CONFIG_FILE: &str = "ward-health.yaml";
pub const DEFAULT_DATA_FILE: &str = "urban_health_data.csv";
pub const DATA_PATH_ENV: &str = "WARD_HEALTH_DATA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported language `{0}` (expected one of: en, ne)")]
    UnknownLanguage(String),
}

/// Contents of the YAML config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub language: Option<String>,
    pub export_format: Option<ExportFormat>,
}

impl Config {
    /// Load `path`, or `ward-health.yaml` when `path` is `None`.
    ///
    /// An explicitly named file must exist; a missing default file yields the
    /// default config. Returns the file actually read, if any.
    pub fn load(path: Option<&Path>) -> Result<(Config, Option<PathBuf>), ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if explicit {
                    return Err(ConfigError::NotFound { path });
                }
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok((Config::default(), None));
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Config::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok((config, Some(path)))
    }

    pub fn parse(text: &str) -> Result<Config, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(text)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_path: Option<PathBuf>,
    pub language: Option<String>,
    pub export_format: Option<ExportFormat>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub data_path: PathBuf,
    pub lang: Lang,
    pub export_format: ExportFormat,
    /// Config file the settings were read from, if any.
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// Merge `config` with `overrides` and the process environment.
    pub fn resolve(
        config: &Config,
        config_path: Option<PathBuf>,
        overrides: &Overrides,
    ) -> Result<Settings, ConfigError> {
        let env_data = env::var_os(DATA_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::resolve_with_env(config, config_path, overrides, env_data)
    }

    /// [`resolve`](Self::resolve) with the environment value passed in.
    pub fn resolve_with_env(
        config: &Config,
        config_path: Option<PathBuf>,
        overrides: &Overrides,
        env_data: Option<PathBuf>,
    ) -> Result<Settings, ConfigError> {
        let data_path = overrides
            .data_path
            .clone()
            .or(env_data)
            .or_else(|| config.data_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let lang = match overrides.language.as_deref().or(config.language.as_deref()) {
            Some(code) => {
                Lang::from_code(code).ok_or_else(|| ConfigError::UnknownLanguage(code.to_string()))?
            }
            None => Lang::default(),
        };

        let export_format = overrides
            .export_format
            .or(config.export_format)
            .unwrap_or_default();

        Ok(Settings {
            data_path,
            lang,
            export_format,
            config_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_without_any_source() {
        let settings =
            Settings::resolve_with_env(&Config::default(), None, &Overrides::default(), None)
                .unwrap();
        assert_eq!(settings.data_path, PathBuf::from("urban_health_data.csv"));
        assert_eq!(settings.lang, Lang::En);
        assert_eq!(settings.export_format, ExportFormat::Json);
    }

    #[test]
    fn precedence_cli_env_file() {
        let config = Config {
            data_path: Some("from-file.csv".into()),
            language: Some("ne".into()),
            export_format: Some(ExportFormat::Yaml),
        };
        let env = Some(PathBuf::from("from-env.csv"));

        let settings =
            Settings::resolve_with_env(&config, None, &Overrides::default(), env.clone()).unwrap();
        assert_eq!(settings.data_path, PathBuf::from("from-env.csv"));
        assert_eq!(settings.lang, Lang::Ne);
        assert_eq!(settings.export_format, ExportFormat::Yaml);

        let overrides = Overrides {
            data_path: Some("from-cli.csv".into()),
            language: Some("EN".into()),
            export_format: Some(ExportFormat::Json),
        };
        let settings = Settings::resolve_with_env(&config, None, &overrides, env).unwrap();
        assert_eq!(settings.data_path, PathBuf::from("from-cli.csv"));
        assert_eq!(settings.lang, Lang::En);
        assert_eq!(settings.export_format, ExportFormat::Json);

        let settings =
            Settings::resolve_with_env(&config, None, &Overrides::default(), None).unwrap();
        assert_eq!(settings.data_path, PathBuf::from("from-file.csv"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let config = Config {
            language: Some("fr".into()),
            ..Config::default()
        };
        let err = Settings::resolve_with_env(&config, None, &Overrides::default(), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage(ref code) if code == "fr"));
    }

    #[test]
    fn load_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_path: wards.csv\nlanguage: ne\nexport_format: yaml").unwrap();

        let (config, path) = Config::load(Some(file.path())).unwrap();
        assert_eq!(path.as_deref(), Some(file.path()));
        assert_eq!(config.data_path, Some(PathBuf::from("wards.csv")));
        assert_eq!(config.language.as_deref(), Some("ne"));
        assert_eq!(config.export_format, Some(ExportFormat::Yaml));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::parse("data_path: a.csv\ncolour: blue\n").is_err());
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }
}
