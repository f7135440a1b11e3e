use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "transactions.csv";

/// Overrides the application directory.
pub const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
/// Overrides the data file regardless of configuration.
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_DATA_FILE";

/// Returns the application-specific data directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_dir_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    config_dir_in(base).join(CONFIG_FILE)
}

/// Default location of the CSV data file inside `base`.
pub fn data_file_in(base: &Path) -> PathBuf {
    base.join(DATA_FILE)
}

/// Data file path forced through the environment, if any.
pub fn data_file_override() -> Option<PathBuf> {
    env::var_os(DATA_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
