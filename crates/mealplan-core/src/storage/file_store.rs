use std::fs;
use std::io::{self, Read as _, Seek, SeekFrom, Write as _};
use std::path::{Path, PathBuf};

use crate::error::CoreError;

use super::kv::KeyValueStore;

/// Stores each record as `<dir>/<key>.json`.
///
/// Writes hold an exclusive lock and reads a shared one, so concurrent
/// processes never observe a half-written record.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.record_path(key);
        let file = match fs::OpenOptions::new().read(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        fs2::FileExt::lock_shared(&file).map_err(CoreError::Io)?;
        let mut data = String::new();
        (&file).read_to_string(&mut data)?;
        fs2::FileExt::unlock(&file).map_err(CoreError::Io)?;
        Ok(Some(data))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.record_path(key);
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        fs2::FileExt::lock_exclusive(&file).map_err(CoreError::Io)?;

        // Truncate only once the lock is held
        file.set_len(0)?;
        (&file).seek(SeekFrom::Start(0))?;
        (&file).write_all(value.as_bytes())?;
        fs2::FileExt::unlock(&file).map_err(CoreError::Io)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "Record written");
        Ok(())
    }
}
