//! Configuration loading.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use tracing::{debug, warn};

/// Name of the project configuration file looked up in the scanned folder.
pub const CONFIG_FILE_NAME: &str = "class-check.json";

/// Project configuration from `class-check.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Classes to accept in addition to the harvested ones.
    pub ignore: Vec<String>,

    /// Project-specific invalid classes and their advice.
    pub invalid: BTreeMap<String, String>,

    /// Include the Font Awesome 5 to 6 renames.
    pub fontawesome: bool,

    /// Glob patterns of files to skip.
    pub exclude: Vec<String>,
}

impl ProjectConfig {
    /// Loads the configuration for a scan.
    ///
    /// An explicit path wins over `<folder>/class-check.json`. A missing
    /// default file yields the defaults silently; an unreadable or malformed
    /// file yields the defaults with a warning.
    pub fn load(folder: &Utf8Path, explicit: Option<&Utf8Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = folder.join(CONFIG_FILE_NAME);
                if !path.exists() {
                    return Self::default();
                }
                path
            }
        };

        match Self::parse_file(&path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path, e);
                Self::default()
            }
        }
    }

    fn parse_file(path: &Utf8Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn folder() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, folder) = folder();
        assert_eq!(ProjectConfig::load(&folder, None), ProjectConfig::default());
    }

    #[test]
    fn test_load_default_file() {
        let (_dir, folder) = folder();
        fs::write(
            folder.join(CONFIG_FILE_NAME),
            r#"{
                "ignore": ["custom-a"],
                "invalid": { "old-removed-class": "use new-class" },
                "fontawesome": true
            }"#,
        )
        .unwrap();

        let config = ProjectConfig::load(&folder, None);
        assert_eq!(config.ignore, vec!["custom-a"]);
        assert_eq!(
            config.invalid.get("old-removed-class").map(String::as_str),
            Some("use new-class")
        );
        assert!(config.fontawesome);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_explicit_path_wins() {
        let (_dir, folder) = folder();
        fs::write(folder.join(CONFIG_FILE_NAME), r#"{ "ignore": ["default"] }"#).unwrap();
        let explicit = folder.join("other.json");
        fs::write(&explicit, r#"{ "exclude": ["vendor/**"] }"#).unwrap();

        let config = ProjectConfig::load(&folder, Some(&explicit));
        assert!(config.ignore.is_empty());
        assert_eq!(config.exclude, vec!["vendor/**"]);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let (_dir, folder) = folder();
        fs::write(folder.join(CONFIG_FILE_NAME), "{ ignore: nope").unwrap();
        assert_eq!(ProjectConfig::load(&folder, None), ProjectConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_gives_defaults() {
        let (_dir, folder) = folder();
        let config = ProjectConfig::load(&folder, Some(&folder.join("absent.json")));
        assert_eq!(config, ProjectConfig::default());
    }
}
