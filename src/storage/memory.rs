use std::collections::HashMap;
use std::io;

use super::*;

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    pub data: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every subsequent `set_item` fail, as a full quota would.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::StorageWrite(io::Error::new(
                io::ErrorKind::StorageFull,
                "storage quota exceeded",
            )));
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
