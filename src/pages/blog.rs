//! Blog index page generation

use maud::{Markup, html};
use serde_json::json;

use super::{BLOG_PATH, SITE_CSS, post_path};
use crate::components::cards::post_card;
use crate::components::layout::{PageMeta, json_ld, page_wrapper};
use crate::components::nav::Section;
use crate::components::terminal::{prompt, terminal_window, window_title};
use crate::post::BlogPost;
use crate::site::SiteProfile;

/// Message shown when the blog has no posts.
pub const EMPTY_MESSAGE: &str = "No posts found. Check back soon for new content!";

/// Generates blog index page listing posts as cards
///
/// The same listing is written to `blog/index.html` and
/// `blog/posts/index.html`; `path` selects which one so that relative links
/// and the active navigation entry match the output location.
///
/// # Arguments
///
/// * `profile`: Site content
/// * `posts`: Posts in display order, newest first
/// * `path`: Output path of the listing page
///
/// # Returns
///
/// Complete HTML markup for the listing page
pub fn generate(profile: &SiteProfile, posts: &[BlogPost], path: &str) -> Markup {
    let blog_title = profile.blog_title();
    let meta = PageMeta::new(&blog_title, &profile.blog_description, path);
    let depth = meta.depth();
    let window = window_title(&profile.owner, &profile.domain, "~/blog");

    page_wrapper(
        profile,
        &meta,
        Section::Blog,
        &[SITE_CSS],
        html! {
            (json_ld(&structured_data(profile, posts)))
            (terminal_window(&window, html! {
                (prompt("cat welcome.txt"))
                h1 class="page-title" { (blog_title) }
                p class="blog-description" { (profile.blog_description) }

                (prompt("ls -t ./posts"))
                @if posts.is_empty() {
                    p class="empty-state" { (EMPTY_MESSAGE) }
                } @else {
                    div class="card-grid" {
                        @for post in posts {
                            (post_card(post, depth))
                        }
                    }
                }
            }))
        },
    )
}

/// Schema.org `Blog` description of the listing.
fn structured_data(profile: &SiteProfile, posts: &[BlogPost]) -> serde_json::Value {
    let base = profile.base_url.trim_end_matches('/');
    let entries: Vec<serde_json::Value> = posts
        .iter()
        .map(|post| {
            json!({
                "@type": "BlogPosting",
                "headline": post.title,
                "description": post.excerpt,
                "datePublished": post.date,
                "url": format!("{}/{}", base, post_path(&post.slug).trim_end_matches("index.html")),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Blog",
        "name": profile.blog_title(),
        "description": profile.blog_description,
        "url": format!("{}/{}", base, BLOG_PATH.trim_end_matches("index.html")),
        "author": { "@type": "Person", "name": profile.owner },
        "blogPost": entries,
    })
}
