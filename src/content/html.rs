//! HTML output for rendered content blocks.

use maud::{Markup, PreEscaped, Render, html};
use tracing::warn;

use super::block::{Block, CodeBlock, Inline};
use super::renderer::render;
use crate::highlight::Highlighter;

/// Link schemes allowed in rendered anchors.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Renders post content to HTML with highlighted code blocks.
///
/// Holds the syntax definitions so one instance can be reused for every
/// post of a site build.
pub struct ContentRenderer {
    highlighter: Highlighter,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::new(),
        }
    }

    /// Renders raw post content to HTML markup.
    ///
    /// # Arguments
    ///
    /// * `content`: Raw post body
    ///
    /// # Returns
    ///
    /// Paragraph and code block markup in document order
    pub fn render(&self, content: &str) -> Markup {
        let blocks = render(content);
        html! {
            @for block in &blocks {
                (self.block(block))
            }
        }
    }

    /// Renders a single block.
    pub fn block(&self, block: &Block) -> Markup {
        match block {
            Block::Paragraph(children) => html! {
                p {
                    @for child in children {
                        (child)
                    }
                }
            },
            Block::Code(code) => self.code_block(code),
        }
    }

    /// Renders a code block, highlighted when its language hint is known.
    ///
    /// A hinted block without a bundled syntax shows its body as plain
    /// escaped text; an unhinted block shows its content verbatim.
    fn code_block(&self, code: &CodeBlock) -> Markup {
        let Some(language) = code.language() else {
            return html! {
                pre class="code-block" {
                    code { (code.content()) }
                }
            };
        };

        let highlighted = match self.highlighter.highlight(code.body(), language) {
            Ok(highlighted) => highlighted,
            Err(e) => {
                warn!(language, error = %e, "Falling back to plain code block");
                None
            }
        };

        html! {
            pre class="code-block" {
                code class=(format!("language-{}", language)) {
                    @match highlighted {
                        Some(spans) => (PreEscaped(spans)),
                        None => (code.body()),
                    }
                }
            }
        }
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Inline {
    fn render(&self) -> Markup {
        match self {
            Inline::Text(text) => html! { (text) },
            Inline::Bold(text) => html! { strong { (text) } },
            Inline::Italic(text) => html! { em { (text) } },
            Inline::Underline(text) => html! { u { (text) } },
            Inline::LineBreak => html! { br; },
            Inline::Link { label, target } => match classify_target(target) {
                LinkTarget::External => html! {
                    a href=(target) target="_blank" rel="noopener noreferrer" { (label) }
                },
                LinkTarget::Local => html! {
                    a href=(target) { (label) }
                },
                LinkTarget::Unsafe => html! { (label) },
            },
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LinkTarget {
    External,
    Local,
    Unsafe,
}

/// Sorts link targets into external, local and rejected.
///
/// A target with a scheme outside [`SAFE_SCHEMES`] (e.g. `javascript:`) is
/// rejected and its label is rendered as text.
fn classify_target(target: &str) -> LinkTarget {
    let trimmed = target.trim();
    let scheme = trimmed.split_once(':').map(|(scheme, _)| scheme).filter(|s| {
        !s.is_empty()
            && !s.contains(['/', '?', '#'])
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    });

    match scheme {
        None => LinkTarget::Local,
        Some(s) if SAFE_SCHEMES.iter().any(|safe| s.eq_ignore_ascii_case(safe)) => {
            LinkTarget::External
        }
        Some(_) => LinkTarget::Unsafe,
    }
}
