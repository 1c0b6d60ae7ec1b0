//! Project and blog post cards

use maud::{Markup, html};

use super::icons::icon;
use crate::post::BlogPost;
use crate::site::Project;
use crate::util::{format_views, href, site_url};

/// Site path of a post page.
pub fn post_path(slug: &str) -> String {
    format!("blog/posts/{}/index.html", slug)
}

/// Renders project card with technologies and links
///
/// # Arguments
///
/// * `project`: Project to display
/// * `depth`: Directory depth of the page holding the card
///
/// # Returns
///
/// Project card markup
pub fn project_card(project: &Project, depth: usize) -> Markup {
    html! {
        article class="card project-card" {
            @if let Some(image) = &project.image {
                img class="card-image" src=(site_url(depth, image)) alt=(project.title) loading="lazy";
            }
            h3 class="card-title" { (project.title) }
            p class="card-description" { (project.description) }
            @if !project.technologies.is_empty() {
                ul class="tech-list" {
                    @for tech in &project.technologies {
                        li class="tech-tag" { (tech) }
                    }
                }
            }
            div class="card-links" {
                @if let Some(link) = &project.link {
                    a href=(link) target="_blank" rel="noopener noreferrer" class="card-link" {
                        (icon("ph ph-arrow-square-out")) " view"
                    }
                }
                @if let Some(github) = &project.github {
                    a href=(github) target="_blank" rel="noopener noreferrer" class="card-link" {
                        (icon("ph ph-github-logo")) " source"
                    }
                }
            }
        }
    }
}

/// Renders blog post card for the post listing
///
/// Shows cover image, title, short date, view count, excerpt, categories
/// and a "Read more" link to the post page.
///
/// # Arguments
///
/// * `post`: Post to summarize
/// * `depth`: Directory depth of the listing page
///
/// # Returns
///
/// Post card markup
pub fn post_card(post: &BlogPost, depth: usize) -> Markup {
    let post_href = href(depth, &post_path(&post.slug));

    html! {
        article class="card post-card" {
            @if let Some(cover) = &post.cover_image {
                a href=(post_href) class="card-image-link" {
                    img class="card-image" src=(site_url(depth, cover)) alt=(post.title) loading="lazy";
                }
            }
            h3 class="card-title" {
                a href=(post_href) { (post.title) }
            }
            div class="post-meta" {
                span class="post-date" {
                    (icon("ph ph-calendar-blank")) " "
                    time datetime=(post.date) { (post.short_date()) }
                }
                span class="post-views" {
                    (icon("ph ph-eye")) " " (format_views(post.view_count()))
                }
            }
            p class="card-description" { (post.excerpt) }
            @if !post.categories.is_empty() {
                ul class="category-list" {
                    @for category in &post.categories {
                        li class="category-tag" { (category) }
                    }
                }
            }
            a href=(post_href) class="read-more" { "Read more →" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> BlogPost {
        BlogPost {
            slug: "hello-world".to_string(),
            title: "Hello <World>".to_string(),
            date: "2025-03-05".to_string(),
            cover_image: Some("/media/blog/hello-world/cover.png".to_string()),
            excerpt: "First post".to_string(),
            author: None,
            categories: vec!["rust".to_string(), "web".to_string()],
            content: "Body".to_string(),
            views: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn test_post_card_contents() {
        // Arrange
        let post = sample_post();

        // Act
        let html = post_card(&post, 1).into_string();

        // Assert
        assert!(html.contains(r#"href="../blog/posts/hello-world/index.html""#));
        assert!(html.contains("Hello &lt;World&gt;"));
        assert!(html.contains("Mar 5, 2025"));
        assert!(html.contains("ph ph-eye"));
        assert!(html.contains("2 views"));
        assert!(html.contains(r#"<li class="category-tag">rust</li>"#));
        assert!(html.contains("Read more →"));
        assert!(html.contains(r#"src="../media/blog/hello-world/cover.png""#));
    }

    #[test]
    fn test_post_card_without_cover_or_categories() {
        // Arrange
        let post = BlogPost {
            cover_image: None,
            categories: Vec::new(),
            views: Vec::new(),
            ..sample_post()
        };

        // Act
        let html = post_card(&post, 0).into_string();

        // Assert
        assert!(!html.contains("<img"));
        assert!(!html.contains("category-list"));
        assert!(html.contains("0 views"));
        assert!(html.contains(r#"href="blog/posts/hello-world/index.html""#));
    }

    #[test]
    fn test_project_card() {
        // Arrange
        let project = Project {
            title: "Tool".to_string(),
            description: "Does things".to_string(),
            technologies: vec!["Rust".to_string()],
            link: Some("https://example.com/tool".to_string()),
            github: None,
            image: None,
        };

        // Act
        let html = project_card(&project, 1).into_string();

        // Assert
        assert!(html.contains(r#"<h3 class="card-title">Tool</h3>"#));
        assert!(html.contains(r#"<li class="tech-tag">Rust</li>"#));
        assert!(html.contains(r#"href="https://example.com/tool""#));
        assert!(!html.contains("source"));
    }

    #[test]
    fn test_post_path() {
        // Arrange & Act & Assert
        assert_eq!(post_path("a-b"), "blog/posts/a-b/index.html");
    }
}
