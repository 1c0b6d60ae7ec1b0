//! Syntax highlighting for fenced code with syntect.

use anyhow::{Context, Result};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// CSS class prefix for highlighted tokens, matched by `assets/post.css`.
pub const CLASS_PREFIX: &str = "hl-";

/// Highlights code snippets into HTML using CSS class names.
///
/// Produces `<span class="hl-*">` markup instead of inline styles so the
/// terminal theme stylesheet controls colors.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates highlighter with syntect's bundled syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code for a language token such as `rust` or `py`.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `language`: Language name or file extension
    ///
    /// # Returns
    ///
    /// HTML with highlight spans, or `None` when no bundled syntax matches
    /// the language
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>> {
        let Some(syntax) = self.syntax_set.find_syntax_by_token(language) else {
            return Ok(None);
        };
        if code.is_empty() {
            return Ok(Some(String::new()));
        }

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .with_context(|| format!("Failed to highlight {} code", language))?;
        }

        Ok(Some(generator.finalize()))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
