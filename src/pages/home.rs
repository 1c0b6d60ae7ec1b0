//! Home page generation

use maud::{Markup, html};

use super::{ABOUT_PATH, BLOG_PATH, CONTACT_PATH, HOME_PATH, PROJECTS_PATH, SITE_CSS};
use crate::components::cards::project_card;
use crate::components::icons::{icon, tile_icon_class};
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::Section;
use crate::components::terminal::{prompt, terminal_window, window_title};
use crate::site::SiteProfile;
use crate::util::href;

/// Navigation tiles as `(name, site path, description)`.
const TILES: &[(&str, &str, &str)] = &[
    ("about", ABOUT_PATH, "Who I am and what I work with"),
    ("projects", PROJECTS_PATH, "Things I have built"),
    ("blog", BLOG_PATH, "Articles and tutorials"),
    ("contact", CONTACT_PATH, "Say hello"),
];

/// Generates home page with intro, navigation tiles and featured project
///
/// # Arguments
///
/// * `profile`: Site content
///
/// # Returns
///
/// Complete HTML markup for `index.html`
pub fn generate(profile: &SiteProfile) -> Markup {
    let description = profile
        .intro
        .first()
        .map(String::as_str)
        .unwrap_or_default();
    let meta = PageMeta::new("Home", description, HOME_PATH);
    let depth = meta.depth();
    let title = window_title(&profile.owner, &profile.domain, "~");

    page_wrapper(
        profile,
        &meta,
        Section::Main,
        &[SITE_CSS],
        html! {
            (terminal_window(&title, html! {
                (prompt("whoami"))
                h1 class="page-title" { (profile.owner) }
                div class="intro" {
                    @for paragraph in &profile.intro {
                        p { (paragraph) }
                    }
                }

                (prompt("ls ~"))
                nav class="tile-grid" {
                    @for (name, path, blurb) in TILES {
                        a href=(href(depth, path)) class="tile" {
                            (icon(tile_icon_class(name)))
                            span class="tile-name" { (*name) "/" }
                            span class="tile-description" { (*blurb) }
                        }
                    }
                }

                @if let Some(project) = profile.featured() {
                    (prompt("cat featured.md"))
                    section class="featured" {
                        h2 class="section-title" { "Featured project" }
                        (project_card(project, depth))
                    }
                }
            }))
        },
    )
}
