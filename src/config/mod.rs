//! User configuration.
//!
//! Configuration is a YAML file holding display-name overrides for extracted
//! libraries. It is looked up next to the manifests first (`.ghlc.yml`), then
//! in the user configuration directory; a missing file means defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::runtime::Runtime;

/// Configuration file name looked up in the project directory.
pub const PROJECT_FILE_NAME: &str = ".ghlc.yml";

/// User configuration.
///
/// `renames` maps an exact repository name (case-sensitive) to the display
/// name to report instead. The canonical name is always retained on the
/// extracted record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub renames: HashMap<String, String>,
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Unlike discovery, an explicitly named file must exist and parse.
    pub fn load_from<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Discover and load configuration for a project directory.
    ///
    /// Tries `<project_root>/.ghlc.yml`, then `<config_dir>/ghlc/config.yml`.
    /// When neither exists, returns the default configuration. A file that
    /// exists but does not parse is an error, not a fallthrough.
    pub fn discover<R: Runtime>(runtime: &R, project_root: &Path) -> Result<Self> {
        for path in Self::candidates(runtime, project_root) {
            if runtime.exists(&path) {
                debug!("Loading config from {}", path.display());
                return Self::load_from(runtime, &path);
            }
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn candidates<R: Runtime>(runtime: &R, project_root: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![project_root.join(PROJECT_FILE_NAME)];
        if let Some(config_dir) = runtime.config_dir() {
            candidates.push(config_dir.join("ghlc").join("config.yml"));
        }
        candidates
    }

    fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    #[test]
    fn test_parse_renames() {
        let config = Config::parse("renames:\n  Alamofire: Networking\n").unwrap();
        assert_eq!(
            config.renames.get("Alamofire").map(String::as_str),
            Some("Networking")
        );
    }

    #[test]
    fn test_parse_empty_document_is_default() {
        // serde(default) lets an empty mapping deserialize cleanly
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_prefers_project_file() {
        let mut runtime = MockRuntime::new();
        let project_file = PathBuf::from("/project/.ghlc.yml");

        runtime.expect_config_dir().returning(|| None);
        runtime
            .expect_exists()
            .with(eq(project_file.clone()))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(project_file))
            .returning(|_| Ok("renames:\n  Charts: DGCharts\n".into()));

        let config = Config::discover(&runtime, Path::new("/project")).unwrap();
        assert_eq!(
            config.renames.get("Charts").map(String::as_str),
            Some("DGCharts")
        );
    }

    #[test]
    fn test_discover_falls_back_to_user_config_dir() {
        let mut runtime = MockRuntime::new();
        let project_file = PathBuf::from("/project/.ghlc.yml");
        let user_file = PathBuf::from("/home/user/.config/ghlc/config.yml");

        runtime
            .expect_exists()
            .with(eq(project_file))
            .returning(|_| false);
        runtime
            .expect_config_dir()
            .returning(|| Some(PathBuf::from("/home/user/.config")));
        runtime
            .expect_exists()
            .with(eq(user_file.clone()))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(user_file))
            .returning(|_| Ok("renames:\n  Alamofire: Networking\n".into()));

        let config = Config::discover(&runtime, Path::new("/project")).unwrap();
        assert_eq!(
            config.renames.get("Alamofire").map(String::as_str),
            Some("Networking")
        );
    }

    #[test]
    fn test_discover_without_any_file_is_default() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);
        runtime.expect_config_dir().returning(|| None);

        let config = Config::discover(&runtime, Path::new("/project")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow::anyhow!("no such file")));

        let result = Config::load_from(&runtime, Path::new("/nowhere/config.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("renames: [not, a, mapping]".into()));

        let result = Config::load_from(&runtime, Path::new("/project/.ghlc.yml"));
        assert!(result.is_err());
    }
}
