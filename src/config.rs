use serde::Deserialize;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use std::fs;

use crate::error::ConfigError;
use crate::matcher::MatchMode;
use crate::sources::desktop::default_search_dirs;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sources: SourceConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub items: Vec<StaticEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_shell() -> String { "/bin/sh".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SourceConfig {
    /// Replaces the default search directories when set.
    #[serde(default)]
    pub dirs: Option<Vec<PathBuf>>,
    #[serde(default)]
    pub extra_dirs: Vec<PathBuf>,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Regexes matched against entry names and descriptor file names.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_max_depth() -> usize { 1 }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dirs: None,
            extra_dirs: Vec::new(),
            max_depth: default_max_depth(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub mode: MatchMode,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StaticEntry {
    pub name: String,
    pub command: String,
    pub icon: Option<String>,
}

impl Config {
    /// Directories to scan, in scan order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.sources.dirs.clone().unwrap_or_else(default_search_dirs);
        dirs.extend(self.sources.extra_dirs.iter().cloned());
        dirs
    }
}

pub fn default_config_path() -> PathBuf {
    let proj_dirs = ProjectDirs::from("org", "launcher", "launcher");
    if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

/// Loads `path`, or the default location when `path` is `None`.
///
/// A missing file at the default location means defaults; an explicitly
/// requested file has to exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path();
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Parse { path: config_path, source })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
