//! Blog post page generation

use maud::{Markup, html};
use serde_json::json;

use super::{POST_CSS, POSTS_PATH, SITE_CSS, post_path};
use crate::components::icons::icon;
use crate::components::layout::{PageMeta, json_ld, page_wrapper};
use crate::components::nav::Section;
use crate::content::{ContentRenderer, excerpt};
use crate::post::BlogPost;
use crate::site::SiteProfile;
use crate::util::{format_views, href, site_url};

/// Length of the description derived from content when a post has no excerpt.
const DESCRIPTION_CHARS: usize = 160;

/// Generates the page of a single blog post
///
/// # Arguments
///
/// * `profile`: Site content, used for chrome and absolute URLs
/// * `post`: Post to render
/// * `renderer`: Content renderer shared across posts
///
/// # Returns
///
/// Complete HTML markup for `blog/posts/<slug>/index.html`
pub fn generate(profile: &SiteProfile, post: &BlogPost, renderer: &ContentRenderer) -> Markup {
    let path = post_path(&post.slug);
    let description = if post.excerpt.trim().is_empty() {
        excerpt(&post.content, DESCRIPTION_CHARS)
    } else {
        post.excerpt.clone()
    };
    let cover_url = post
        .cover_image
        .as_deref()
        .map(|cover| absolute_url(&profile.base_url, cover));
    let meta = PageMeta {
        og_type: "article",
        image: cover_url.as_deref(),
        ..PageMeta::new(&post.title, &description, &path)
    };
    let depth = meta.depth();

    page_wrapper(
        profile,
        &meta,
        Section::Blog,
        &[SITE_CSS, POST_CSS],
        html! {
            (json_ld(&structured_data(profile, post, cover_url.as_deref())))
            article class="post" {
                a href=(href(depth, POSTS_PATH)) class="back-link" {
                    (icon("ph ph-arrow-left")) " cd .."
                }
                @if let Some(cover) = &post.cover_image {
                    img class="post-cover" src=(site_url(depth, cover)) alt=(post.title);
                }
                h1 class="post-title" { (post.title) }
                div class="post-meta" {
                    span class="post-date" {
                        (icon("ph ph-calendar-blank")) " "
                        time datetime=(post.date) { (post.long_date()) }
                    }
                    @if let Some(author) = &post.author {
                        span class="post-author" {
                            (icon("ph ph-user")) " " (author)
                        }
                    }
                    span class="post-views" {
                        (icon("ph ph-eye")) " " (format_views(post.view_count()))
                    }
                }
                @if !post.categories.is_empty() {
                    ul class="category-list" {
                        @for category in &post.categories {
                            li class="category-tag" { (category) }
                        }
                    }
                }
                div class="post-content" {
                    (renderer.render(&post.content))
                }
            }
        },
    )
}

/// Resolves a root-absolute URL against the site base URL.
fn absolute_url(base_url: &str, url: &str) -> String {
    if url.starts_with('/') && !url.starts_with("//") {
        format!("{}{}", base_url.trim_end_matches('/'), url)
    } else {
        url.to_string()
    }
}

/// Schema.org `BlogPosting` description of the post.
fn structured_data(profile: &SiteProfile, post: &BlogPost, cover: Option<&str>) -> serde_json::Value {
    let author = post.author.as_deref().unwrap_or(&profile.owner);
    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.excerpt,
        "datePublished": post.date,
        "author": { "@type": "Person", "name": author },
        "keywords": post.categories.join(", "),
    });
    if let Some(cover) = cover {
        data["image"] = json!(cover);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost {
            slug: "hello".to_string(),
            title: "Hello World".to_string(),
            date: "2025-03-05".to_string(),
            cover_image: Some("/media/blog/hello/cover.png".to_string()),
            excerpt: "A first post".to_string(),
            author: Some("Kalan".to_string()),
            categories: vec!["rust".to_string()],
            content: "Some **bold** text\n\n```rust\nfn main() {}\n```".to_string(),
            views: vec!["a".to_string()],
        }
    }

    #[test]
    fn test_post_page_contents() {
        // Arrange
        let profile = SiteProfile::default();
        let renderer = ContentRenderer::new();

        // Act
        let html = generate(&profile, &sample(), &renderer).into_string();

        // Assert
        assert!(html.contains(r#"<h1 class="post-title">Hello World</h1>"#));
        assert!(html.contains("March 5, 2025"));
        assert!(html.contains("1 view"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains(r#"class="code-block""#));
        assert!(html.contains(r#"src="../../../media/blog/hello/cover.png""#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://kalanroye.com/media/blog/hello/cover.png">"#
        ));
        assert!(html.contains(r#"href="../../../assets/post.css""#));
        assert!(html.contains(r#"<a href="../../../blog/posts/index.html" class="back-link">"#));
    }

    #[test]
    fn test_post_page_description_fallback() {
        // Arrange
        let profile = SiteProfile::default();
        let post = BlogPost {
            excerpt: String::new(),
            content: "Plain body text".to_string(),
            cover_image: None,
            ..sample()
        };

        // Act
        let html = generate(&profile, &post, &ContentRenderer::new()).into_string();

        // Assert
        assert!(html.contains(r#"<meta name="description" content="Plain body text">"#));
        assert!(!html.contains("og:image"));
    }

    #[test]
    fn test_absolute_url() {
        // Arrange & Act & Assert
        assert_eq!(absolute_url("https://a.com/", "/media/x.png"), "https://a.com/media/x.png");
        assert_eq!(absolute_url("https://a.com", "https://b.com/x.png"), "https://b.com/x.png");
    }

    #[test]
    fn test_structured_data_author_fallback() {
        // Arrange
        let profile = SiteProfile::default();
        let post = BlogPost {
            author: None,
            ..sample()
        };

        // Act
        let data = structured_data(&profile, &post, None);

        // Assert
        assert_eq!(data["author"]["name"], "Kalan Roye");
        assert!(data.get("image").is_none());
    }
}
