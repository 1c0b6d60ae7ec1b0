//! Blob backends for uploaded media.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{BlobStore, Result, StoreError};

/// Stored blob as reported by [`BlobStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobEntry {
    pub path: String,
    pub url: String,
    pub size: u64,
}

/// Validates a relative blob path.
///
/// Rejects empty paths, absolute paths, backslashes and empty, `.` or `..`
/// components so a path can never leave the store root.
pub fn validate_blob_path(path: &str) -> Result<()> {
    let invalid = path.is_empty()
        || path.starts_with('/')
        || path.contains('\\')
        || path
            .split('/')
            .any(|part| part.is_empty() || part == "." || part == "..");

    if invalid {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    Ok(())
}

fn blob_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

fn path_from_url<'a>(base_url: &str, url: &'a str) -> Result<&'a str> {
    let base = base_url.trim_end_matches('/');
    url.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| StoreError::UnknownUrl(url.to_string()))
}

/// In-memory blob store, mainly for tests.
#[derive(Debug, Clone)]
pub struct MemoryBlobs {
    base_url: String,
    blobs: BTreeMap<String, Vec<u8>>,
}

impl MemoryBlobs {
    pub fn new() -> Self {
        Self {
            base_url: "/media".to_string(),
            blobs: BTreeMap::new(),
        }
    }

    pub fn bytes(&self, path: &str) -> Option<&[u8]> {
        self.blobs.get(path).map(Vec::as_slice)
    }
}

impl Default for MemoryBlobs {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for MemoryBlobs {
    fn put(&mut self, path: &str, bytes: &[u8]) -> Result<String> {
        validate_blob_path(path)?;
        self.blobs.insert(path.to_string(), bytes.to_vec());
        Ok(blob_url(&self.base_url, path))
    }

    fn list(&self, prefix: &str) -> Result<Vec<BlobEntry>> {
        Ok(self
            .blobs
            .iter()
            .filter(|(path, _)| path.starts_with(prefix))
            .map(|(path, bytes)| BlobEntry {
                path: path.clone(),
                url: blob_url(&self.base_url, path),
                size: bytes.len() as u64,
            })
            .collect())
    }

    fn del(&mut self, url: &str) -> Result<()> {
        let path = path_from_url(&self.base_url, url)?;
        self.blobs.remove(path);
        Ok(())
    }
}

/// Blob store backed by a directory.
///
/// A blob at `blog/post/cover.png` is written to
/// `<root>/blog/post/cover.png` and served as `<base_url>/blog/post/cover.png`.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
    base_url: String,
}

impl FsBlobStore {
    /// Creates store rooted at a directory, served under `/media`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_base_url(root, "/media")
    }

    pub fn with_base_url(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_path(&self, path: &str) -> PathBuf {
        path.split('/')
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// `/` joined path of a file below the root, `None` for non UTF-8 names.
    fn relative_path(&self, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(&self.root).ok()?;
        let parts = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        Some(parts.join("/"))
    }
}

impl BlobStore for FsBlobStore {
    fn put(&mut self, path: &str, bytes: &[u8]) -> Result<String> {
        validate_blob_path(path)?;
        let file = self.file_path(path);

        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        fs::write(&file, bytes).map_err(|e| StoreError::io(&file, e))?;

        Ok(blob_url(&self.base_url, path))
    }

    fn list(&self, prefix: &str) -> Result<Vec<BlobEntry>> {
        // Only walk the deepest directory fully named by the prefix.
        let dir_part = prefix.rsplit_once('/').map_or("", |(dir, _)| dir);
        if !dir_part.is_empty() {
            validate_blob_path(dir_part)?;
        }

        let start = if dir_part.is_empty() {
            self.root.clone()
        } else {
            self.file_path(dir_part)
        };

        if !start.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&start).min_depth(1).follow_links(false) {
            let entry = entry.map_err(|e| walk_error(&start, e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(path) = self.relative_path(entry.path()) else {
                continue;
            };
            if !path.starts_with(prefix) {
                continue;
            }

            let size = entry
                .metadata()
                .map_err(|e| walk_error(entry.path(), e))?
                .len();
            entries.push(BlobEntry {
                url: blob_url(&self.base_url, &path),
                path,
                size,
            });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn del(&mut self, url: &str) -> Result<()> {
        let path = path_from_url(&self.base_url, url)?;
        validate_blob_path(path)?;

        let file = self.file_path(path);
        match fs::remove_file(&file) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&file, e)),
        }
    }
}

fn walk_error(fallback: &Path, e: walkdir::Error) -> StoreError {
    let path = e.path().unwrap_or(fallback).to_path_buf();
    StoreError::io(path, e.into())
}
