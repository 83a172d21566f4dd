pub mod file;
pub mod memory;

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::errors::AppError;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key under which the contact list is persisted.
pub const STORAGE_KEY: &str = "contacts";

/// String key-value port the contact store persists through.
///
/// Mirrors the shape of browser local storage: values are opaque strings,
/// an absent key is not an error.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set_item(key, value)
    }

    fn medium(&self) -> &str {
        (**self).medium()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    Memory,
    File,
}

impl StorageMedium {
    pub fn is_memory(&self) -> bool {
        matches!(self, StorageMedium::Memory)
    }

    pub fn is_file(&self) -> bool {
        matches!(self, StorageMedium::File)
    }

    pub fn is_which(&self) -> &str {
        if self.is_memory() { "mem" } else { "file" }
    }
}

impl FromStr for StorageMedium {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mem" | "memory" => Ok(StorageMedium::Memory),
            "file" => Ok(StorageMedium::File),
            other => Err(AppError::Validation(format!(
                "'{}' is not a recognized storage medium (expected mem or file)",
                other
            ))),
        }
    }
}

impl fmt::Display for StorageMedium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.is_which())
    }
}

pub fn open_storage(config: &Config) -> Box<dyn KeyValueStorage> {
    tracing::debug!(
        medium = %config.storage,
        data_dir = %config.data_dir.display(),
        "opening storage"
    );

    match config.storage {
        StorageMedium::Memory => Box::new(MemoryStorage::new()),
        StorageMedium::File => Box::new(FileStorage::new(&config.data_dir)),
    }
}
