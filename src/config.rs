// File: ./src/config.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_ENV: &str = "TICKBOX_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub placeholder: String,
    pub empty_message: String,
    pub log_level: String,
    /// Rows skipped by PageUp / PageDown in the TUI.
    pub page_step: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "My To-Do List".to_string(),
            placeholder: "Add a new to-do...".to_string(),
            empty_message: "No to-dos yet! Add some above.".to_string(),
            log_level: "info".to_string(),
            page_step: 10,
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir).join("config.toml"));
        }
        ProjectDirs::from("com", "tickbox", "tickbox")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Loads the user config. A missing file yields the defaults; a file
    /// that cannot be read or parsed is an error.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Like [`Config::load`], but never fails: errors are returned beside
    /// the defaults so they can be logged once logging is up.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        match Self::load() {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg.sanitized())
    }

    fn sanitized(mut self) -> Self {
        if self.page_step == 0 {
            self.page_step = 1;
        }
        self
    }
}
