// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::{CopyTaskError, Result};

use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::copytask_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from an explicit path if one was given, else from the default path.
    /// Only the default path may be missing.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(CopyTaskError::Config(format!(
                "settings file {} not found",
                path.display()
            ))),
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Get the copytask home directory (~/.copytask or $COPYTASK_HOME).
    pub fn copytask_home() -> PathBuf {
        if let Ok(home) = std::env::var("COPYTASK_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".copytask")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"task_key": "run", "overwrite": false}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.task_key, "run");
        assert!(!settings.overwrite);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, CopyTaskError::Json(_)));
    }

    #[test]
    fn test_load_from_invalid_task_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"task_key": "  "}"#).unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, CopyTaskError::Config(_)));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.json");
        std::fs::write(&path, r#"{"task_key": "id"}"#).unwrap();

        let settings = Settings::resolve(Some(&path)).unwrap();
        assert_eq!(settings.task_key, "id");
    }

    #[test]
    fn test_resolve_explicit_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        let err = Settings::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, CopyTaskError::Config(_)));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(Settings::default_path().ends_with("settings.json"));
    }
}
