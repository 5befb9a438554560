use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::menu::{Menu, default_app_menu};
use crate::no_changes::BlankSlateStyle;
use crate::platform::Platform;

const CONFIG_DIR_NAME: &str = ".blankslate";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub platform: Option<Platform>,
    pub blank_slate: BlankSlateStyle,
    pub menu_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn platform_or(&self, detected: Platform) -> Platform {
        self.platform.unwrap_or(detected)
    }

    pub fn load_menu(&self, platform: Platform) -> Result<Menu> {
        match &self.menu_path {
            Some(path) => load_menu_file(path),
            None => Ok(default_app_menu(platform)),
        }
    }
}

pub fn load_menu_file(path: &Path) -> Result<Menu> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read menu file at {}", path.display()))?;
    toml::from_str::<Menu>(&raw)
        .with_context(|| format!("failed to parse TOML menu file at {}", path.display()))
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Result<Self> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow!("failed to resolve home directory"))?;
        Ok(Self::at(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_or_default(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config file at {}", self.path.display()))?;
        toml::from_str::<AppConfig>(&raw).with_context(|| {
            format!(
                "failed to parse TOML config file at {}",
                self.path.display()
            )
        })
    }
}
