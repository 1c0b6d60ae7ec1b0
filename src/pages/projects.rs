//! Projects page generation

use maud::{Markup, html};

use super::{PROJECTS_PATH, SITE_CSS};
use crate::components::cards::project_card;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::Section;
use crate::components::terminal::{prompt, shell_user, terminal_window, window_title};
use crate::post::slugify;
use crate::site::SiteProfile;

/// Generates projects page with a directory listing and project cards
///
/// # Arguments
///
/// * `profile`: Site content
///
/// # Returns
///
/// Complete HTML markup for `projects/index.html`
pub fn generate(profile: &SiteProfile) -> Markup {
    let description = format!("Projects built by {}", profile.owner);
    let meta = PageMeta::new("Projects", &description, PROJECTS_PATH);
    let depth = meta.depth();
    let title = window_title(&profile.owner, &profile.domain, "~/projects");
    let user = shell_user(&profile.owner);

    page_wrapper(
        profile,
        &meta,
        Section::Main,
        &[SITE_CSS],
        html! {
            (terminal_window(&title, html! {
                (prompt("ls -la ./projects"))
                pre class="ls-listing" {
                    "total " (profile.projects.len()) "\n"
                    @for project in &profile.projects {
                        "drwxr-xr-x  " (user) "  staff  " (slugify(&project.title)) "/\n"
                    }
                }

                h1 class="page-title" { "Projects" }
                @if profile.projects.is_empty() {
                    p class="empty-state" { "No projects yet." }
                } @else {
                    div class="card-grid" {
                        @for project in &profile.projects {
                            (project_card(project, depth))
                        }
                    }
                }
            }))
        },
    )
}
