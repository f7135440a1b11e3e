use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    errors::CliError,
    storage::{CsvStorage, StorageBackend},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Environment variable that switches the CLI into script mode.
pub const SCRIPT_MODE_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Everything a menu action needs: configuration and the record store.
pub struct ShellContext {
    pub mode: CliMode,
    pub config: Config,
    pub storage: Box<dyn StorageBackend>,
    pub data_path: Option<PathBuf>,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the user's configuration directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let data_path = manager.resolve_data_file(&config);
        tracing::info!(path = %data_path.display(), ?mode, "starting shell");
        let storage = CsvStorage::new(data_path.clone());
        let mut context = Self::with_storage(mode, config, Box::new(storage));
        context.data_path = Some(data_path);
        Ok(context)
    }

    pub fn with_storage(mode: CliMode, config: Config, storage: Box<dyn StorageBackend>) -> Self {
        Self {
            mode,
            config,
            storage,
            data_path: None,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    pub fn currency_symbol(&self) -> Option<&str> {
        self.config.currency_symbol.as_deref()
    }
}
