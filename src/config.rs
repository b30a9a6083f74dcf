//! App configuration.
//!
//! Loaded from `~/.goals/config.toml`. Every key is optional, so a missing
//! file simply means the defaults — only a file the user asked for with
//! `--config` has to exist.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

/// App configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Accent color override (goal rows, submit hint), `#rrggbb`.
    pub accent: Option<String>,

    /// Background color override for the root view, `#rrggbb`.
    pub background: Option<String>,
}

/// Errors from loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads the config from `path`, falling back to [`Config::default_path`].
    ///
    /// Returns the defaults when the default-location file (or the home
    /// directory itself) doesn't exist; returns an error when an explicitly
    /// given file is missing, unreadable, or fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Read { path, source: e }),
        };

        toml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
    }

    /// The default config path: `~/.goals/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".goals").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn reads_overrides_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "accent = \"#ff8800\"\nbackground = \"#000000\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config.accent.as_deref(), Some("#ff8800"));
        assert_eq!(config.background.as_deref(), Some("#000000"));
    }

    #[test]
    fn empty_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();

        assert!(config.accent.is_none());
        assert!(config.background.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nowhere.toml");

        let err = Config::load(Some(path.as_path())).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "accent = [not toml").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
