//! Page footer component

use maud::{Markup, html};

use super::icons::{icon, social_icon_class};
use super::nav::Section;
use crate::site::SiteProfile;
use crate::util::{current_year, href};

/// Renders footer with copyright, social links and section cross link
///
/// Portfolio pages link to the blog and blog pages link back to the
/// portfolio.
///
/// # Arguments
///
/// * `profile`: Site owner and social links
/// * `section`: Section of the current page
/// * `depth`: Directory depth of the current page
///
/// # Returns
///
/// Footer markup
pub fn footer(profile: &SiteProfile, section: Section, depth: usize) -> Markup {
    footer_for_year(profile, section, depth, current_year())
}

fn footer_for_year(profile: &SiteProfile, section: Section, depth: usize, year: i32) -> Markup {
    let (cross_label, cross_path) = match section {
        Section::Main => ("~/blog", "blog/index.html"),
        Section::Blog => ("~/portfolio", "index.html"),
    };

    html! {
        footer class="site-footer" {
            p class="footer-copy" {
                "© " (year) " " (profile.owner) ". All rights reserved."
            }
            ul class="footer-socials" {
                @for social in &profile.socials {
                    li {
                        a href=(social.url) target="_blank" rel="noopener noreferrer" aria-label=(social.label) {
                            (icon(social_icon_class(&social.label, &social.url)))
                            span class="footer-social-label" { (social.label) }
                        }
                    }
                }
            }
            a href=(href(depth, cross_path)) class="footer-cross-link" { (cross_label) }
        }
    }
}
