//! Storage capabilities for posts and media.
//!
//! Posts live in a key-value store and media in a blob store. Both are
//! traits so the blog logic can run against local files, memory (tests) or
//! a hosted service without changes.

mod blob;
mod kv;

pub use blob::{BlobEntry, FsBlobStore, MemoryBlobs, validate_blob_path};
pub use kv::{FileKv, MemoryKv};

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage path: {0}")]
    InvalidPath(String),

    #[error("URL does not belong to this store: {0}")]
    UnknownUrl(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Key-value store holding JSON values.
pub trait KvStore {
    /// Reads a value, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Removes a key. Removing an absent key is not an error.
    fn del(&mut self, key: &str) -> Result<()>;
}

/// Blob store for uploaded media.
///
/// Paths are `/` separated and relative; every stored blob has a public URL.
pub trait BlobStore {
    /// Stores bytes at a path and returns the blob's URL.
    fn put(&mut self, path: &str, bytes: &[u8]) -> Result<String>;

    /// Lists blobs whose path starts with `prefix`, sorted by path.
    fn list(&self, prefix: &str) -> Result<Vec<BlobEntry>>;

    /// Deletes the blob behind a URL returned by [`BlobStore::put`].
    fn del(&mut self, url: &str) -> Result<()>;
}

/// Layout of the local data directory.
///
/// ```text
/// <root>/store.json   posts and the slug list
/// <root>/media/       uploaded media, published under /media
/// <root>/site.json    optional site profile override
/// <root>/.session     admin session token
/// ```
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store_file(&self) -> PathBuf {
        self.root.join("store.json")
    }

    pub fn media_dir(&self) -> PathBuf {
        self.root.join("media")
    }

    pub fn site_file(&self) -> PathBuf {
        self.root.join("site.json")
    }

    pub fn session_file(&self) -> PathBuf {
        self.root.join(".session")
    }

    /// Key-value store backed by [`DataDir::store_file`].
    pub fn kv(&self) -> FileKv {
        FileKv::new(self.store_file())
    }

    /// Blob store backed by [`DataDir::media_dir`].
    pub fn blobs(&self) -> FsBlobStore {
        FsBlobStore::new(self.media_dir())
    }
}
