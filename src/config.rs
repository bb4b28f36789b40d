//! Application configuration.
//!
//! The config file only chooses the initial selection. Selection changes made
//! in the dashboard are never written back.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE};
use crate::error::DashboardError;
use crate::learning_path::PathKey;
use crate::theme::ThemeKey;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theme selected when the dashboard opens.
    pub theme: Option<ThemeKey>,
    /// Learning path selected when the dashboard opens.
    pub path: Option<PathKey>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns [`DashboardError::Config`] if the file cannot be read, is not
    /// valid JSON, or names a theme or path outside the fixed sets.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path).map_err(|e| DashboardError::config(path, e))?;
        let config: Config =
            serde_json::from_slice(&buf).map_err(|e| DashboardError::config(path, e))?;
        Ok(config)
    }

    /// Resolves the startup configuration.
    ///
    /// An explicitly requested file must exist. The default location is
    /// optional: when it is missing (or no home directory is known) the
    /// built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, DashboardError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match get_config_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::debug!("Skipping default config: {}", e);
                Ok(Self::default())
            }
        }
    }
}

/// Returns the default config location, `~/.seo-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    let home = home::home_dir().ok_or(DashboardError::NoHomeDir)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    // A config naming both keys should select them.
    fn test_load_reads_theme_and_path() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, r#"{"theme": "neonNights", "path": "technical"}"#);

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.theme, Some(ThemeKey::NeonNights));
        assert_eq!(config.path, Some(PathKey::Technical));
    }

    #[test]
    // Every field is optional.
    fn test_load_accepts_empty_object() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "{}");

        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    // A theme outside the fixed set must be rejected before the UI starts.
    fn test_load_rejects_unknown_theme() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, r#"{"theme": "midnight"}"#);

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unknown theme 'midnight'"));
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, r#"{"progress": 50}"#);

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "invalid json");

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(DashboardError::Config { .. })));
    }

    #[test]
    fn test_resolve_requires_explicit_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        assert!(Config::resolve(Some(&missing)).is_err());
    }
}
