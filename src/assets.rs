//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const TERMINAL: &str = include_str!("../assets/components/terminal.css");
const CARDS: &str = include_str!("../assets/components/cards.css");

const POST: &str = include_str!("../assets/post.css");
const HIGHLIGHT: &str = include_str!("../assets/highlight.css");

/// Writes all bundled CSS assets to output directory
///
/// Produces `site.css` for every page and `post.css` for post pages.
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file cannot be
/// written.
pub fn write_css_assets(assets_dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(assets_dir, "site.css", &[BASE, LAYOUT, NAV, TERMINAL, CARDS])?;
    write_bundled(assets_dir, "post.css", &[POST, HIGHLIGHT])?;
    Ok(vec!["site.css".to_string(), "post.css".to_string()])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
