use std::path::PathBuf;

use dotenv::dotenv;

use crate::errors::AppError;
use crate::storage::StorageMedium;

pub const STORAGE_ENV: &str = "PHONEBOOK_STORAGE";
pub const DATA_DIR_ENV: &str = "PHONEBOOK_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "./.instance";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageMedium,
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageMedium::File,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Config {
    /// Loads `.env` (if any) into the process environment without
    /// overriding variables that are already set.
    pub fn load_dotenv() {
        dotenv().ok();
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(choice) = lookup(STORAGE_ENV) {
            config.storage = choice.parse()?;
        }

        if let Some(dir) = lookup(DATA_DIR_ENV)
            && !dir.trim().is_empty()
        {
            config.data_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
