//! Contact page generation

use maud::{Markup, html};

use super::{CONTACT_PATH, SITE_CSS};
use crate::components::icons::{icon, social_icon_class};
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::Section;
use crate::components::terminal::{prompt, terminal_window, window_title};
use crate::site::SiteProfile;

/// Generates contact page with email, social links and a `mailto:` form
///
/// The form has no backend; submitting it opens the visitor's mail client.
///
/// # Arguments
///
/// * `profile`: Site content
///
/// # Returns
///
/// Complete HTML markup for `contact/index.html`
pub fn generate(profile: &SiteProfile) -> Markup {
    let description = format!("Get in touch with {}", profile.owner);
    let meta = PageMeta::new("Contact", &description, CONTACT_PATH);
    let title = window_title(&profile.owner, &profile.domain, "~/contact");
    let mailto = format!("mailto:{}", profile.email);

    page_wrapper(
        profile,
        &meta,
        Section::Main,
        &[SITE_CSS],
        html! {
            (terminal_window(&title, html! {
                (prompt("cat contact.txt"))
                h1 class="page-title" { "Contact" }
                p {
                    "Have a question or want to work together? Reach me at "
                    a href=(mailto) { (profile.email) }
                    "."
                }
                ul class="contact-socials" {
                    @for social in &profile.socials {
                        li {
                            a href=(social.url) target="_blank" rel="noopener noreferrer" {
                                (icon(social_icon_class(&social.label, &social.url)))
                                " " (social.label)
                            }
                        }
                    }
                }

                (prompt("./send-message.sh"))
                form class="contact-form" action=(mailto) method="post" enctype="text/plain" {
                    label for="name" { "name:" }
                    input id="name" name="name" type="text" required;
                    label for="email" { "email:" }
                    input id="email" name="email" type="email" required;
                    label for="message" { "message:" }
                    textarea id="message" name="message" rows="6" required {}
                    button type="submit" class="submit" { "send" }
                }
            }))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_targets_email() {
        // Arrange
        let profile = SiteProfile::default();

        // Act
        let html = generate(&profile).into_string();

        // Assert
        assert!(html.contains(r#"action="mailto:hello@kalanroye.com""#));
        assert!(html.contains(r#"<a href="mailto:hello@kalanroye.com">hello@kalanroye.com</a>"#));
        assert!(html.contains("https://linkedin.com/in/kalan-roye"));
        assert!(html.contains("<textarea"));
    }
}
