//! Configuration for Luma, read from `~/.luma/config.toml`.
//!
//! ```toml
//! [engine]
//! default_exam_mode = "neet"
//! fallback_enabled = false
//!
//! [logging]
//! filter = "luma_engine=debug"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use luma_types::ExamMode;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use thiserror::Error;

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct LumaConfig {
    pub engine: Option<EngineConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    /// Exam mode used when neither the CLI nor the question context names one.
    #[serde(default, deserialize_with = "exam_mode")]
    pub default_exam_mode: Option<ExamMode>,
    /// Consult the fallback provider when no deterministic solver matches.
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_exam_mode: None,
            fallback_enabled: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` still wins.
    pub filter: Option<String>,
}

fn exam_mode<'de, D>(deserializer: D) -> Result<Option<ExamMode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| ExamMode::parse(&raw).map_err(de::Error::custom))
        .transpose()
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".luma").join("config.toml"))
}

impl LumaConfig {
    /// Load the user config. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn default_exam_mode(&self) -> Option<ExamMode> {
        self.engine.as_ref().and_then(|engine| engine.default_exam_mode)
    }

    #[must_use]
    pub fn fallback_enabled(&self) -> bool {
        self.engine
            .as_ref()
            .is_none_or(|engine| engine.fallback_enabled)
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.filter.as_deref())
            .filter(|filter| !filter.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: LumaConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_exam_mode(), None);
        assert!(config.fallback_enabled());
        assert_eq!(config.log_filter(), None);
    }

    #[test]
    fn engine_section_without_fallback_key_keeps_it_enabled() {
        let config: LumaConfig = toml::from_str("[engine]\ndefault_exam_mode = \"jee\"").unwrap();
        assert_eq!(config.default_exam_mode(), Some(ExamMode::Jee));
        assert!(config.fallback_enabled());
    }

    #[test]
    fn load_from_reads_every_section() {
        let (_dir, path) = write_config(
            r#"
[engine]
default_exam_mode = "NEET"
fallback_enabled = false

[logging]
filter = "luma_engine=debug"
"#,
        );
        let config = LumaConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.default_exam_mode(), Some(ExamMode::Neet));
        assert!(!config.fallback_enabled());
        assert_eq!(config.log_filter(), Some("luma_engine=debug"));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = LumaConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn parse_error_names_the_path() {
        let (_dir, path) = write_config("[engine\nbroken");
        let err = LumaConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn unknown_exam_mode_is_a_parse_error() {
        let (_dir, path) = write_config("[engine]\ndefault_exam_mode = \"olympiad\"");
        assert!(matches!(
            LumaConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn blank_log_filter_is_ignored() {
        let config: LumaConfig = toml::from_str("[logging]\nfilter = \"  \"").unwrap();
        assert_eq!(config.log_filter(), None);
    }
}
