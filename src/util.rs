//! Utility functions for termfolio

use crate::post::PostDate;

/// Returns the `../` prefix leading from a page back to the site root.
///
/// # Arguments
///
/// * `depth`: Directory levels between the page and the site root
///
/// # Returns
///
/// Empty string for root level pages, otherwise `depth` repetitions of `../`
pub fn relative_root(depth: usize) -> String {
    "../".repeat(depth)
}

/// Builds a relative link from a page at `depth` to a site path.
///
/// # Arguments
///
/// * `depth`: Directory levels between the page and the site root
/// * `path`: Site path without leading slash, e.g. `about/index.html`
///
/// # Returns
///
/// Relative href usable from the page
pub fn href(depth: usize, path: &str) -> String {
    format!("{}{}", relative_root(depth), path.trim_start_matches('/'))
}

/// Rewrites a root-absolute URL such as `/media/x.png` to a relative one.
///
/// Absolute URLs with a scheme and already relative URLs are returned as is.
pub fn site_url(depth: usize, url: &str) -> String {
    if url.starts_with('/') && !url.starts_with("//") {
        href(depth, url)
    } else {
        url.to_string()
    }
}

/// Counts directory levels of an output file relative to the site root.
///
/// `index.html` is 0, `blog/posts/slug/index.html` is 3.
pub fn page_depth(output_path: &str) -> usize {
    output_path.trim_start_matches('/').matches('/').count()
}

/// Current calendar year in UTC.
pub fn current_year() -> i32 {
    PostDate::today().year()
}

/// Formats a view count as "1 view" or "N views".
pub fn format_views(count: usize) -> String {
    if count == 1 {
        "1 view".to_string()
    } else {
        format!("{} views", count)
    }
}
