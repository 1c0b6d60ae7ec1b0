//! Key-value backends.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use super::{KvStore, Result, StoreError};

/// In-memory store, mainly for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: BTreeMap<String, Value>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn del(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as one JSON object on disk.
///
/// Every call reads the file, so separate processes see each other's
/// writes. Writes go to a uniquely named temporary sibling first and are
/// renamed into place. A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct FileKv {
    path: PathBuf,
}

impl FileKv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, Value>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        // Temp name is unique per write.
        let json = serde_json::to_vec_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        let tmp_path = tmp.path().to_path_buf();
        tmp.write_all(&json)
            .and_then(|()| tmp.flush())
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), keys = entries.len(), "Persisted store");
        Ok(())
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn del(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_kv_roundtrip() {
        // Arrange
        let mut kv = MemoryKv::new();

        // Act
        kv.set("a", json!({"x": 1})).expect("set");
        let value = kv.get("a").expect("get");
        kv.del("a").expect("del");

        // Assert
        assert_eq!(value, Some(json!({"x": 1})));
        assert!(kv.is_empty());
    }

    #[test]
    fn test_file_kv_missing_file_is_empty() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let kv = FileKv::new(dir.path().join("store.json"));

        // Act
        let value = kv.get("anything").expect("Missing file should read as empty");

        // Assert
        assert_eq!(value, None);
    }

    #[test]
    fn test_file_kv_persists_between_instances() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let path = dir.path().join("nested").join("store.json");
        let mut writer = FileKv::new(&path);

        // Act
        writer.set("blog:post:a", json!("hello")).expect("set");
        let reader = FileKv::new(&path);
        let value = reader.get("blog:post:a").expect("get");

        // Assert
        assert_eq!(value, Some(json!("hello")));
        let files = fs::read_dir(path.parent().expect("parent"))
            .expect("read_dir")
            .count();
        assert_eq!(files, 1, "Temp file renamed into place");
    }

    #[test]
    fn test_file_kv_concurrent_writers() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let path = dir.path().join("store.json");

        // Act
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let mut kv = FileKv::new(path);
                    for i in 0..20 {
                        kv.set(&format!("writer:{}", n), json!(i))?;
                    }
                    Ok::<(), StoreError>(())
                })
            })
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("Writer thread panicked"))
            .collect();

        // Assert
        assert!(results.iter().all(|r| r.is_ok()), "{:?}", results);
        let reader = FileKv::new(&path);
        assert!(reader.get("writer:0").is_ok(), "Store stays valid JSON");
        let files = fs::read_dir(dir.path()).expect("read_dir").count();
        assert_eq!(files, 1, "No temp files left behind");
    }

    #[test]
    fn test_file_kv_delete() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let mut kv = FileKv::new(dir.path().join("store.json"));
        kv.set("k", json!(1)).expect("set");

        // Act
        kv.del("k").expect("del");
        kv.del("never-existed").expect("del absent");

        // Assert
        assert_eq!(kv.get("k").expect("get"), None);
    }

    #[test]
    fn test_file_kv_corrupt_file_is_error() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").expect("write");
        let kv = FileKv::new(&path);

        // Act
        let result = kv.get("k");

        // Assert
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
