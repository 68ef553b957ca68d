//! Optional `sprout.toml` configuration at the workspace root.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Config file name looked up at the workspace root.
pub const CONFIG_FILE: &str = "sprout.toml";

/// Root configuration, read from `sprout.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SproutConfig {
    /// Component generation defaults.
    #[serde(default)]
    pub component: ComponentConfig,
}

impl SproutConfig {
    /// Load `sprout.toml` from the workspace root, or defaults if absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "Loading configuration");
        Self::from_file(&path)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScaffoldError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ScaffoldError::Config(format!("Failed to parse config: {}", e)))
    }
}

/// Component generation defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentConfig {
    /// Default target directory, relative to the workspace root.
    pub path: Option<PathBuf>,

    /// Prefer TypeScript templates instead of scanning.
    pub typescript: Option<bool>,

    /// Prefer Sass stylesheets instead of scanning.
    pub scss: Option<bool>,
}

impl ComponentConfig {
    /// Configured target directory resolved against the workspace root.
    pub fn target_path(&self, root: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|path| root.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SproutConfig::parse_toml("").unwrap();
        assert!(config.component.path.is_none());
        assert!(config.component.typescript.is_none());
        assert!(config.component.scss.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [component]
            path = "src/components"
            typescript = true
            scss = false
        "#;

        let config = SproutConfig::parse_toml(toml).unwrap();
        assert_eq!(config.component.typescript, Some(true));
        assert_eq!(config.component.scss, Some(false));
        assert_eq!(
            config.component.target_path(Path::new("/work")),
            Some(PathBuf::from("/work/src/components"))
        );
    }

    #[test]
    fn test_invalid_config() {
        let err = SproutConfig::parse_toml("[component]\ntypescript = \"yes\"").unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let config = SproutConfig::load(dir.path()).unwrap();
        assert!(config.component.path.is_none());
    }

    #[test]
    fn test_load_from_root() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[component]\nscss = true\n").unwrap();
        let config = SproutConfig::load(dir.path()).unwrap();
        assert_eq!(config.component.scss, Some(true));
    }
}
