//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::footer::footer;
use super::nav::{Section, nav_bar};
use super::terminal::user_host;
use crate::site::SiteProfile;
use crate::util::{href, page_depth};

/// Head metadata of a generated page.
#[derive(Debug, Clone)]
pub struct PageMeta<'a> {
    /// Page title text (without suffix)
    pub title: &'a str,
    /// Meta and Open Graph description
    pub description: &'a str,
    /// Output path relative to the site root, e.g. `about/index.html`
    pub path: &'a str,
    /// Open Graph type, `website` or `article`
    pub og_type: &'static str,
    /// Open Graph image URL
    pub image: Option<&'a str>,
}

impl<'a> PageMeta<'a> {
    pub fn new(title: &'a str, description: &'a str, path: &'a str) -> Self {
        Self {
            title,
            description,
            path,
            og_type: "website",
            image: None,
        }
    }

    /// Directory depth of the page.
    pub fn depth(&self) -> usize {
        page_depth(self.path)
    }

    /// Canonical URL of the page under `base_url`, without `index.html`.
    pub fn canonical_url(&self, base_url: &str) -> String {
        let path = self.path.strip_suffix("index.html").unwrap_or(self.path);
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, head metadata, navigation bar and footer
/// across all page types. Stylesheet paths are given relative to the site
/// root and rewritten for the page depth.
///
/// # Arguments
///
/// * `profile`: Site owner, domain and social links
/// * `meta`: Title, description and location of the page
/// * `section`: Site section selecting the navigation links
/// * `stylesheets`: CSS files relative to the site root
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    profile: &SiteProfile,
    meta: &PageMeta<'_>,
    section: Section,
    stylesheets: &[&str],
    body: Markup,
) -> Markup {
    let depth = meta.depth();
    let full_title = format!("{} | {}", meta.title, profile.owner);
    let brand = user_host(&profile.owner, &profile.domain);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                meta name="description" content=(meta.description);
                meta property="og:title" content=(full_title);
                meta property="og:description" content=(meta.description);
                meta property="og:type" content=(meta.og_type);
                meta property="og:site_name" content=(profile.domain);
                meta property="og:url" content=(meta.canonical_url(&profile.base_url));
                @if let Some(image) = meta.image {
                    meta property="og:image" content=(image);
                    meta name="twitter:card" content="summary_large_image";
                } @else {
                    meta name="twitter:card" content="summary";
                }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(href(depth, stylesheet));
                }
            }
            body {
                (nav_bar(&brand, section, meta.path, depth))
                main class="container" {
                    (body)
                }
                (footer(profile, section, depth))
            }
        }
    }
}

/// Renders structured data as a JSON-LD script element
///
/// `</` is escaped so string values cannot close the script element early.
pub fn json_ld(data: &serde_json::Value) -> Markup {
    let json = data.to_string().replace("</", "<\\/");
    html! {
        script type="application/ld+json" { (PreEscaped(json)) }
    }
}
