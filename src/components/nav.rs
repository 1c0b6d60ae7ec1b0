//! Terminal style navigation bar

use maud::{Markup, html};

use crate::util::href;

/// Part of the site a page belongs to.
///
/// The portfolio and the blog have separate navigation links and link to
/// each other from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Main,
    Blog,
}

/// Navigation link as `(label, site path)`.
pub type NavLink = (&'static str, &'static str);

const MAIN_LINKS: &[NavLink] = &[
    ("~", "index.html"),
    ("~/about", "about/index.html"),
    ("~/projects", "projects/index.html"),
    ("~/contact", "contact/index.html"),
];

const BLOG_LINKS: &[NavLink] = &[
    ("~/blog", "blog/index.html"),
    ("~/blog/posts", "blog/posts/index.html"),
];

/// Commands listed by the `help` menu as `(command, description)`.
const HELP_COMMANDS: &[(&str, &str)] = &[
    ("cd ~", "Go to the home page"),
    ("cd ~/about", "About me, skills and experience"),
    ("cd ~/projects", "Things I have built"),
    ("cd ~/contact", "Get in touch"),
    ("cd ~/blog", "Read the blog"),
];

impl Section {
    /// Navigation links shown for this section.
    pub fn links(self) -> &'static [NavLink] {
        match self {
            Section::Main => MAIN_LINKS,
            Section::Blog => BLOG_LINKS,
        }
    }
}

/// Renders navigation bar with active link highlighted
///
/// A link is active when its site path equals the current page path. The
/// blog post listing at `blog/posts/<slug>/` also activates `~/blog/posts`.
///
/// # Arguments
///
/// * `brand`: Prompt text shown at the left, e.g. `kalan@kalanroye.com`
/// * `section`: Site section whose links are shown
/// * `current_path`: Output path of the current page
/// * `depth`: Directory depth of the current page
///
/// # Returns
///
/// Navigation bar markup
pub fn nav_bar(brand: &str, section: Section, current_path: &str, depth: usize) -> Markup {
    let home = match section {
        Section::Main => "index.html",
        Section::Blog => "blog/index.html",
    };

    html! {
        header class="nav-bar" {
            a href=(href(depth, home)) class="nav-brand" {
                span class="prompt-user" { (brand) }
                span class="prompt-symbol" { ":~$" }
            }
            nav class="nav-links" {
                @for (label, path) in section.links() {
                    @if is_active(path, current_path) {
                        a href=(href(depth, path)) class="nav-link nav-link-active" aria-current="page" { (*label) }
                    } @else {
                        a href=(href(depth, path)) class="nav-link" { (*label) }
                    }
                }
            }
            (help_menu())
        }
    }
}

fn is_active(link_path: &str, current_path: &str) -> bool {
    if link_path == current_path {
        return true;
    }
    link_path == "blog/posts/index.html" && current_path.starts_with("blog/posts/")
}

/// Renders static `help` menu listing navigation commands
pub fn help_menu() -> Markup {
    html! {
        details class="help-menu" {
            summary class="help-toggle" { "help" }
            ul class="help-list" {
                @for (command, description) in HELP_COMMANDS {
                    li {
                        code class="help-command" { (*command) }
                        span class="help-description" { (*description) }
                    }
                }
            }
        }
    }
}
