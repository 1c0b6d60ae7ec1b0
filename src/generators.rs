//! Whole-site generation.
//!
//! Renders every portfolio page, the blog listing and one page per post
//! into an output directory, then bundles CSS and copies uploaded media.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::assets::write_css_assets;
use crate::blog::Blog;
use crate::content::ContentRenderer;
use crate::pages::{self, post_path};
use crate::site::SiteProfile;
use crate::store::{BlobStore, DataDir, KvStore};

/// Inputs of a site build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Data directory holding the post store and media
    pub data: DataDir,
    /// Output directory for the generated site
    pub output: PathBuf,
    /// Portfolio content
    pub profile: SiteProfile,
}

/// Summary of a site build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Written pages, in generation order
    pub pages: Vec<PathBuf>,
    /// Number of post pages written
    pub posts: usize,
    /// Slugs of posts skipped because they failed to render
    pub skipped: Vec<String>,
    /// Number of media files copied
    pub media_files: usize,
}

/// Builds the complete site from a data directory.
///
/// # Arguments
///
/// * `options`: Data directory, output directory and profile
///
/// # Returns
///
/// Report listing written pages, skipped posts and copied media
///
/// # Errors
///
/// Returns error if the post store cannot be read or an output file cannot
/// be written. Individual invalid posts are skipped with a warning instead.
pub fn build_site(options: &BuildOptions) -> Result<BuildReport> {
    let blog = Blog::new(options.data.kv(), options.data.blobs());
    let mut report = write_site(&blog, &options.profile, &options.output)?;

    report.media_files = copy_dir(&options.data.media_dir(), &options.output.join("media"))
        .context("Failed to copy media")?;

    info!(
        pages = report.pages.len(),
        posts = report.posts,
        skipped = report.skipped.len(),
        media = report.media_files,
        "Site built"
    );
    Ok(report)
}

/// Writes all pages and CSS for a blog into `output`.
///
/// Media is not copied; see [`build_site`].
///
/// # Errors
///
/// Returns error if posts cannot be listed or a file cannot be written.
pub fn write_site<K: KvStore, B: BlobStore>(
    blog: &Blog<K, B>,
    profile: &SiteProfile,
    output: &Path,
) -> Result<BuildReport> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let posts = blog.sorted_posts().context("Failed to list posts")?;
    let mut report = BuildReport::default();

    let static_pages = [
        (pages::HOME_PATH, pages::home::generate(profile)),
        (pages::ABOUT_PATH, pages::about::generate(profile)),
        (pages::PROJECTS_PATH, pages::projects::generate(profile)),
        (pages::CONTACT_PATH, pages::contact::generate(profile)),
        (pages::NOT_FOUND_PATH, pages::not_found::generate(profile)),
    ];
    for (path, markup) in static_pages {
        report.pages.push(write_page(output, path, markup)?);
    }

    let mut published = Vec::with_capacity(posts.len());
    for post in posts {
        match post.validate() {
            Ok(()) => published.push(post),
            Err(e) => {
                warn!(slug = %post.slug, error = %e, "Skipping post that failed to render");
                report.skipped.push(post.slug);
            }
        }
    }

    for path in [pages::BLOG_PATH, pages::POSTS_PATH] {
        let markup = pages::blog::generate(profile, &published, path);
        report.pages.push(write_page(output, path, markup)?);
    }

    let renderer = ContentRenderer::new();
    for post in &published {
        let markup = pages::post::generate(profile, post, &renderer);
        report
            .pages
            .push(write_page(output, &post_path(&post.slug), markup)?);
        report.posts += 1;
    }

    write_css_assets(&output.join("assets"))?;
    Ok(report)
}

/// Writes markup to a site path under `output`, creating parent directories.
fn write_page(output: &Path, site_path: &str, markup: Markup) -> Result<PathBuf> {
    let file = site_path
        .split('/')
        .fold(output.to_path_buf(), |acc, part| acc.join(part));

    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&file, markup.into_string())
        .with_context(|| format!("Failed to write page: {}", file.display()))?;

    debug!(path = %file.display(), "Wrote page");
    Ok(file)
}

/// Recursively copies files from `src` to `dst`, returning the file count.
///
/// A missing source directory copies nothing. Symlinks are not followed.
fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Entry outside {}: {}", src.display(), entry.path().display()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            count += 1;
        }
    }

    Ok(count)
}
