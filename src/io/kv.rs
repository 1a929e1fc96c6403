use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Key holding the serialized item collection
pub const ITEMS_KEY: &str = "items";
/// Key holding the dark-theme preference ("true" / "false")
pub const THEME_KEY: &str = "dark-theme";

/// Error type for key-value writes. Reads never error — absent and unreadable
/// both surface as `None`.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("could not write key {key}: {source}")]
    WriteError {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Abstract key-value store the app persists through. The store is the only
/// persistence surface; callers treat save failure as best-effort.
pub trait KvStore {
    /// Read the value for a key. Absent or unreadable keys are `None`.
    fn load(&self, key: &str) -> Option<String>;
    /// Write the value for a key, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), KvError>;
}

/// File-backed store: one file per key under the data directory.
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileKv { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileKv {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        write_atomic(&self.dir, &self.key_path(key), value).map_err(|source| {
            KvError::WriteError {
                key: key.to_string(),
                source,
            }
        })
    }
}

/// Write via a tempfile in the same directory plus rename, so a crash
/// mid-write never leaves a truncated value behind.
fn write_atomic(dir: &Path, path: &Path, value: &str) -> Result<(), std::io::Error> {
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(value.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// In-memory store, used by tests.
#[derive(Debug, Clone, Default)]
pub struct MemKv {
    entries: HashMap<String, String>,
}

impl MemKv {
    pub fn new() -> Self {
        MemKv::default()
    }
}

impl KvStore for MemKv {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_kv_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut kv = FileKv::new(dir.path());
        kv.save(ITEMS_KEY, "[1,2,3]").unwrap();
        assert_eq!(kv.load(ITEMS_KEY).as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_kv_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let kv = FileKv::new(dir.path());
        assert!(kv.load("nothing-here").is_none());
    }

    #[test]
    fn file_kv_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut kv = FileKv::new(dir.path());
        kv.save(THEME_KEY, "true").unwrap();
        kv.save(THEME_KEY, "false").unwrap();
        assert_eq!(kv.load(THEME_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn file_kv_creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep/data");
        let mut kv = FileKv::new(&nested);
        kv.save(ITEMS_KEY, "[]").unwrap();
        assert_eq!(kv.load(ITEMS_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn mem_kv_round_trip() {
        let mut kv = MemKv::new();
        assert!(kv.load(ITEMS_KEY).is_none());
        kv.save(ITEMS_KEY, "[]").unwrap();
        assert_eq!(kv.load(ITEMS_KEY).as_deref(), Some("[]"));
    }
}
