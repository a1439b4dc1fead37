use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::launcher::LaunchSettings;

impl Config {
    /// Location of the config file.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("sln-launcher").join("config.toml"))
    }

    /// Load from [`Config::path`], or defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to [`Config::path`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Absolute path of the search tool.
    pub fn search_program(&self) -> Result<PathBuf> {
        resolve_program(&self.search.command)
    }

    /// Launch settings derived from the `[open]` section.
    pub fn launch_settings(&self) -> Result<LaunchSettings> {
        Ok(LaunchSettings {
            open_command: resolve_program(&self.open.command)?,
            extra_path: self.open.extra_path.clone(),
            new_instance: self.open.new_instance,
        })
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "search.command" => Ok(self.search.command.clone()),
            "open.command" => Ok(self.open.command.clone()),
            "open.extra_path" => Ok(self.open.extra_path.clone()),
            "open.new_instance" => Ok(self.open.new_instance.to_string()),
            "ide.candidates" => Ok(self.ide.candidates.join(",")),
            "alert.dialog" => Ok(self.alert.dialog.to_string()),
            _ => bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "search.command" => self.search.command = non_empty(key, value)?,
            "open.command" => self.open.command = non_empty(key, value)?,
            "open.extra_path" => self.open.extra_path = single_dir(key, value)?,
            "open.new_instance" => self.open.new_instance = parse_bool(value)?,
            "ide.candidates" => {
                self.ide.candidates = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToString::to_string)
                    .collect();
            }
            "alert.dialog" => self.alert.dialog = parse_bool(value)?,
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    value.parse::<bool>()
        .with_context(|| format!("Invalid boolean value: {value}"))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        bail!("{key} cannot be empty");
    }
    Ok(value.to_string())
}

fn single_dir(key: &str, value: &str) -> Result<String> {
    let dir = value.trim_matches(':');
    if dir.contains(':') {
        bail!("{key} must be a single directory, got {value}");
    }
    Ok(dir.to_string())
}

/// Absolute paths are used as-is; bare names are looked up on `PATH`.
fn resolve_program(command: &str) -> Result<PathBuf> {
    if command.contains('/') {
        return Ok(PathBuf::from(command));
    }
    which::which(command).with_context(|| format!("Could not find {command} on PATH"))
}
