#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use expense_tracker::{config::ConfigManager, storage::CsvStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated application directory for one test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Storage and config manager rooted in a fresh temporary directory.
pub fn setup_test_env() -> (CsvStorage, ConfigManager) {
    let base = temp_home();
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    let storage = CsvStorage::new(base.join("transactions.csv"));
    (storage, config_manager)
}
