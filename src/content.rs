//! Post content rendering.
//!
//! Post bodies use a small markup dialect: triple backtick code fences,
//! `[label](target)` links, `**bold**` / `__bold__`, `*italic*` /
//! `_italic_`, `++underline++`, and blank lines between paragraphs.
//! [`render`] turns a body into [`Block`]s and never fails; markup it cannot
//! match is shown as literal text. [`ContentRenderer`] maps blocks to HTML.
//!
//! Overlapping emphasis is resolved flat: the span that starts first wins
//! and styles are never nested.

mod block;
mod fence;
mod html;
mod inline;
mod renderer;

pub use block::{Block, CodeBlock, Inline, LANGUAGE_HINTS};
pub use fence::{FENCE, Segment, split_fences};
pub use html::ContentRenderer;
pub use inline::{FormattingSpan, LinkSpan, Style, find_links, find_spans, parse_inlines};
pub use renderer::{excerpt, render};
