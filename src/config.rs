use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub categories: CategoryConfig,
}

/// Per-category switches; a missing key means enabled.
#[derive(Deserialize, Debug, Clone)]
pub struct CategoryConfig {
    #[serde(default = "default_true")]
    pub apps: bool,
    #[serde(default = "default_true")]
    pub files: bool,
    #[serde(default = "default_true")]
    pub commands: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            apps: true,
            files: true,
            commands: true,
        }
    }
}

pub fn load_config() -> Result<Config> {
    let proj_dirs = ProjectDirs::from("org", "beckon", "beckon");
    let config_path = if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_default_to_enabled() {
        let config: Config = toml::from_str("").expect("parse");
        assert!(config.categories.apps);
        assert!(config.categories.files);
        assert!(config.categories.commands);
    }

    #[test]
    fn categories_can_be_disabled() {
        let config: Config =
            toml::from_str("[categories]\nfiles = false\n").expect("parse");
        assert!(config.categories.apps);
        assert!(!config.categories.files);
        assert!(config.categories.commands);
    }
}
