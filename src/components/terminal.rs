//! Terminal window frame

use maud::{Markup, html};

/// Renders a terminal window with traffic-light controls
///
/// # Arguments
///
/// * `title`: Text shown in the window title bar
/// * `body`: Window content
///
/// # Returns
///
/// Terminal window markup
pub fn terminal_window(title: &str, body: Markup) -> Markup {
    html! {
        div class="terminal" {
            div class="terminal-header" {
                span class="terminal-dot dot-red" {}
                span class="terminal-dot dot-yellow" {}
                span class="terminal-dot dot-green" {}
                span class="terminal-title" { (title) }
            }
            div class="terminal-body" {
                (body)
            }
        }
    }
}

/// Renders a shell prompt line with a command, e.g. `$ whoami`.
pub fn prompt(command: &str) -> Markup {
    html! {
        div class="prompt-line" {
            span class="prompt" { "$" }
            " "
            span class="command" { (command) }
        }
    }
}

/// Shell user name: the owner's lowercased first name.
pub fn shell_user(owner: &str) -> String {
    owner
        .split_whitespace()
        .next()
        .unwrap_or("guest")
        .to_lowercase()
}

/// Shell style `user@host`.
pub fn user_host(owner: &str, domain: &str) -> String {
    format!("{}@{}", shell_user(owner), domain)
}

/// Window title in the usual `user@host: path` form.
pub fn window_title(owner: &str, domain: &str, path: &str) -> String {
    format!("{}: {}", user_host(owner, domain), path)
}
