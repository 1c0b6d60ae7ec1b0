//! Phosphor icon rendering

use maud::{Markup, html};

/// Renders a Phosphor icon by class name
///
/// # Arguments
///
/// * `class`: Phosphor icon classes, e.g. `ph ph-eye`
///
/// # Returns
///
/// Icon markup hidden from assistive technology
pub fn icon(class: &str) -> Markup {
    html! {
        i class=(class) aria-hidden="true" {}
    }
}

/// Returns Phosphor icon classes for a social profile link
///
/// Matches the link label case insensitively and falls back to the URL host
/// so that `https://x.com/...` still gets the X logo. Unknown services use a
/// generic link icon.
///
/// # Arguments
///
/// * `label`: Display label of the link, e.g. "GitHub"
/// * `url`: Link target
///
/// # Returns
///
/// Phosphor icon class names
pub fn social_icon_class(label: &str, url: &str) -> &'static str {
    let label = label.to_lowercase();
    let url = url.to_lowercase();
    let matches = |name: &str, host: &str| label.contains(name) || url.contains(host);

    if matches("github", "github.com") {
        "ph ph-github-logo"
    } else if matches("linkedin", "linkedin.com") {
        "ph ph-linkedin-logo"
    } else if matches("twitter", "x.com") || label == "x" {
        "ph ph-x-logo"
    } else if url.starts_with("mailto:") {
        "ph ph-envelope-simple"
    } else {
        "ph ph-link"
    }
}

/// Icon classes of the four home page navigation tiles.
pub fn tile_icon_class(name: &str) -> &'static str {
    match name {
        "about" => "ph ph-user",
        "projects" => "ph ph-folder-simple",
        "blog" => "ph ph-article",
        "contact" => "ph ph-envelope-simple",
        _ => "ph ph-terminal-window",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_icon_by_label() {
        // Arrange & Act & Assert
        assert_eq!(
            social_icon_class("GitHub", "https://example.com"),
            "ph ph-github-logo"
        );
        assert_eq!(
            social_icon_class("LinkedIn", "https://example.com"),
            "ph ph-linkedin-logo"
        );
        assert_eq!(
            social_icon_class("Twitter", "https://example.com"),
            "ph ph-x-logo"
        );
    }

    #[test]
    fn test_social_icon_by_url() {
        // Arrange & Act & Assert
        assert_eq!(
            social_icon_class("Me", "https://x.com/someone"),
            "ph ph-x-logo",
            "Host should identify the service when the label does not"
        );
        assert_eq!(
            social_icon_class("Mail", "mailto:a@b.c"),
            "ph ph-envelope-simple"
        );
    }

    #[test]
    fn test_social_icon_generic() {
        // Arrange & Act & Assert
        assert_eq!(
            social_icon_class("Homepage", "https://example.org"),
            "ph ph-link"
        );
    }

    #[test]
    fn test_icon_markup() {
        // Arrange & Act
        let html = icon("ph ph-eye").into_string();

        // Assert
        assert_eq!(html, r#"<i class="ph ph-eye" aria-hidden="true"></i>"#);
    }
}
