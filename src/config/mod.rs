//! User preferences and the location of the data file.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::TrackerError,
    utils::{paths, persistence::write_atomic},
};

/// Persistent CLI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Custom CSV location; defaults to `transactions.csv` in the app directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Prefix printed before amounts in summaries, e.g. `$`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Config {
    fn default_ui_color_enabled() -> bool {
        true
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            currency_symbol: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

/// Loads and saves [`Config`] under an application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        fs::create_dir_all(paths::config_dir_in(&base))?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    /// Picks the data file: environment override, then config, then default.
    ///
    /// A relative `data_file` in the config is taken relative to the app directory.
    pub fn resolve_data_file(&self, config: &Config) -> PathBuf {
        if let Some(forced) = paths::data_file_override() {
            return forced;
        }
        match &config.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.base.join(path),
            None => paths::data_file_in(&self.base),
        }
    }
}
