//! About page generation

use maud::{Markup, html};

use super::{ABOUT_PATH, SITE_CSS};
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::Section;
use crate::components::terminal::{prompt, terminal_window, window_title};
use crate::site::{Entry, SiteProfile};

/// Generates about page with bio, skills, experience and education
///
/// Skills are printed as the JSON document a `cat skills.json` would show.
///
/// # Arguments
///
/// * `profile`: Site content
///
/// # Returns
///
/// Complete HTML markup for `about/index.html`
pub fn generate(profile: &SiteProfile) -> Markup {
    let description = format!("About {}: skills, experience and education", profile.owner);
    let meta = PageMeta::new("About", &description, ABOUT_PATH);
    let title = window_title(&profile.owner, &profile.domain, "~/about");

    page_wrapper(
        profile,
        &meta,
        Section::Main,
        &[SITE_CSS],
        html! {
            (terminal_window(&title, html! {
                (prompt("cat about.md"))
                h1 class="page-title" { "About" }
                div class="about-text" {
                    @for paragraph in &profile.about {
                        p { (paragraph) }
                    }
                }

                (prompt("cat skills.json"))
                pre class="json-block" {
                    code { (profile.skills_json()) }
                }

                @if !profile.experience.is_empty() {
                    (prompt("ls ~/experience"))
                    (entries("Experience", &profile.experience))
                }

                @if !profile.education.is_empty() {
                    (prompt("ls ~/education"))
                    (entries("Education", &profile.education))
                }
            }))
        },
    )
}

fn entries(heading: &str, items: &[Entry]) -> Markup {
    html! {
        section class="entries" {
            h2 class="section-title" { (heading) }
            @for item in items {
                article class="entry" {
                    h3 class="entry-title" { (item.title) }
                    p class="entry-period" { (item.period) }
                    p class="entry-summary" { (item.summary) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page_contents() {
        // Arrange
        let profile = SiteProfile::default();

        // Act
        let html = generate(&profile).into_string();

        // Assert
        assert!(html.contains("cat skills.json"));
        assert!(html.contains("&quot;languages&quot;: ["));
        assert!(html.contains("Full-Stack Developer @ Unifor"));
        assert!(html.contains("Western University"));
        assert!(html.contains(r#"class="nav-link nav-link-active" aria-current="page">~/about"#));
    }

    #[test]
    fn test_about_page_skips_empty_sections() {
        // Arrange
        let profile = SiteProfile {
            experience: Vec::new(),
            education: Vec::new(),
            ..SiteProfile::default()
        };

        // Act
        let html = generate(&profile).into_string();

        // Assert
        assert!(!html.contains("ls ~/experience"));
        assert!(!html.contains("Education"));
    }
}
