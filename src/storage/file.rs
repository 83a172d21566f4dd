use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use super::*;

/// Directory-backed storage, one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    pub dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        let mut file = match OpenOptions::new().read(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no stored value");
                return Ok(None);
            }
            Err(e) => return Err(AppError::StorageRead(e)),
        };

        let mut data = String::new();
        file.read_to_string(&mut data).map_err(AppError::StorageRead)?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "read stored value");
        Ok(Some(data))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        create_file_parent(&path).map_err(AppError::StorageWrite)?;

        // Each write gets its own sibling temp file, renamed over the target once synced.
        let mut tmp = Builder::new()
            .prefix(&format!(".{}.", key))
            .suffix(".tmp")
            .tempfile_in(&self.dir)
            .map_err(AppError::StorageWrite)?;
        tmp.write_all(value.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(AppError::StorageWrite)?;
        tmp.persist(&path).map_err(|e| AppError::StorageWrite(e.error))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote stored value");
        Ok(())
    }

    fn medium(&self) -> &str {
        "file"
    }
}

pub fn create_file_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
