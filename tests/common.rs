//! Shared helpers for integration tests.
//!
//! Builds posts and temporary data directories used across test files.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use termfolio::{BlogPost, DataDir};

/// Admin key used by tests that need an authorized session.
pub const ADMIN_KEY: &str = "correct horse battery staple";

/// Creates a valid post with a fixed date.
///
/// # Arguments
///
/// * `slug`: Post slug, also used to derive the title
/// * `date`: Publication date, `YYYY-MM-DD`
pub fn sample_post(slug: &str, date: &str) -> BlogPost {
    BlogPost {
        slug: slug.to_string(),
        title: format!("Post {}", slug),
        date: date.to_string(),
        cover_image: None,
        excerpt: format!("About {}", slug),
        author: None,
        categories: vec!["rust".to_string()],
        content: "Intro with **bold** text.\n\n```rust\nfn main() {}\n```".to_string(),
        views: Vec::new(),
    }
}

/// Creates an empty data directory inside a temporary directory.
///
/// # Returns
///
/// The temporary directory guard and the data directory layout
///
/// # Errors
///
/// Returns error if the temporary directory cannot be created
pub fn temp_data_dir() -> Result<(TempDir, DataDir)> {
    let dir = TempDir::new()?;
    let data = DataDir::new(dir.path().join("data"));
    Ok((dir, data))
}

/// Writes a text file and returns its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}
