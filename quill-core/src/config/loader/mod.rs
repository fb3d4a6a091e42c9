use crate::config::constants::defaults;
use crate::config::{OutputConfig, ProviderConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for quill
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QuillConfig {
    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Terminal output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl QuillConfig {
    /// Write the default configuration to `workspace/quill.toml`.
    ///
    /// Returns the written path, or `None` when the file exists and `force`
    /// is false.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Option<PathBuf>> {
        let config_path = workspace.as_ref().join(defaults::CONFIG_FILE_NAME);
        if config_path.exists() && !force {
            return Ok(None);
        }
        Self::create_sample_config(&config_path)?;
        Ok(Some(config_path))
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let config_content = toml::to_string_pretty(&QuillConfig::default())
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: QuillConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from a specific workspace.
    ///
    /// Search order: `quill.toml`, `.quill/quill.toml`, `~/.quill/quill.toml`.
    /// Defaults are used when none exists.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(defaults::CONFIG_FILE_NAME),
            workspace
                .join(defaults::CONFIG_DIR_NAME)
                .join(defaults::CONFIG_FILE_NAME),
        ];
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(
                home_dir
                    .join(defaults::CONFIG_DIR_NAME)
                    .join(defaults::CONFIG_FILE_NAME),
            );
        }

        if let Some(path) = candidates.iter().find(|path| path.exists()) {
            return Self::load_from_file(path);
        }

        Ok(Self {
            config: QuillConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: QuillConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &QuillConfig {
        &self.config
    }

    /// Mutable access for command-line overrides
    pub fn config_mut(&mut self) -> &mut QuillConfig {
        &mut self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_workspace_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(
            temp_dir.path().join("quill.toml"),
            "[provider]\nmodel = \"gemini-2.5-pro\"\n\n[output]\nshow_prompt = true\n",
        )
        .expect("Failed to write config");

        let manager = ConfigManager::load_from_workspace(temp_dir.path())
            .expect("Failed to load configuration");
        let config = manager.config();
        assert_eq!(config.provider.model, "gemini-2.5-pro");
        assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
        assert!(config.output.show_prompt);
        assert_eq!(
            manager.config_path(),
            Some(temp_dir.path().join("quill.toml").as_path())
        );
    }

    #[test]
    fn dot_directory_config_is_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().join(".quill");
        fs::create_dir_all(&dir).expect("Failed to create .quill");
        fs::write(dir.join("quill.toml"), "[provider]\napi_key_env = \"MY_KEY\"\n")
            .expect("Failed to write config");

        let manager = ConfigManager::load_from_workspace(temp_dir.path())
            .expect("Failed to load configuration");
        assert_eq!(manager.config().provider.api_key_env, "MY_KEY");
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[provider\nmodel = 1").expect("Failed to write config");

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn bootstrap_respects_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let written = QuillConfig::bootstrap_project(temp_dir.path(), false)
            .expect("Failed to bootstrap");
        assert_eq!(written, Some(temp_dir.path().join("quill.toml")));

        let skipped = QuillConfig::bootstrap_project(temp_dir.path(), false)
            .expect("Failed to bootstrap");
        assert_eq!(skipped, None);

        let reloaded = ConfigManager::load_from_file(temp_dir.path().join("quill.toml"))
            .expect("Failed to reload sample config");
        assert_eq!(reloaded.config(), &QuillConfig::default());
    }
}
