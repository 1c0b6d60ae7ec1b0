//! Not found page generation

use maud::{Markup, html};

use super::{HOME_PATH, NOT_FOUND_PATH, SITE_CSS};
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::Section;
use crate::components::terminal::{prompt, terminal_window, window_title};
use crate::site::SiteProfile;
use crate::util::href;

/// Generates the 404 page served for unknown paths
pub fn generate(profile: &SiteProfile) -> Markup {
    let meta = PageMeta::new("404", "Page not found", NOT_FOUND_PATH);
    let title = window_title(&profile.owner, &profile.domain, "~");

    page_wrapper(
        profile,
        &meta,
        Section::Main,
        &[SITE_CSS],
        html! {
            (terminal_window(&title, html! {
                (prompt("cd ./requested-page"))
                p class="error-line" {
                    "bash: cd: ./requested-page: No such file or directory"
                }
                h1 class="page-title" { "404: page not found" }
                p {
                    "The page you are looking for does not exist. "
                    a href=(href(0, HOME_PATH)) { "cd ~" }
                }
            }))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page() {
        // Arrange
        let profile = SiteProfile::default();

        // Act
        let html = generate(&profile).into_string();

        // Assert
        assert!(html.contains("404: page not found"));
        assert!(html.contains(r#"<a href="index.html">cd ~</a>"#));
    }
}
