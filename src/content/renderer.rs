//! Content rendering pipeline.

use super::block::{Block, Inline};
use super::fence::{Segment, split_fences};
use super::inline::parse_inlines;

/// Renders a post body into display blocks.
///
/// Runs fence extraction, link extraction, emphasis formatting and
/// paragraph assembly in that order. CRLF line endings outside code blocks
/// are treated as LF. The function is total: malformed or
/// unbalanced markup is emitted as literal text, never as an error.
///
/// # Arguments
///
/// * `content`: Raw post body
///
/// # Returns
///
/// Blocks in document order; empty for empty input
///
/// # Examples
///
/// ```
/// use termfolio::content::{Block, Inline, render};
///
/// let blocks = render("**hi**");
/// assert_eq!(blocks, vec![Block::paragraph([Inline::Bold("hi".to_string())])]);
/// ```
pub fn render(content: &str) -> Vec<Block> {
    let mut assembler = ParagraphAssembler::default();

    for segment in split_fences(content) {
        match segment {
            Segment::Text(text) => {
                // Code segments stay verbatim; only prose line endings are normalised.
                let text = text.replace("\r\n", "\n");
                for node in parse_inlines(&text) {
                    assembler.push(node);
                }
            }
            Segment::Code(code) => assembler.push_code(code),
        }
    }

    assembler.finish()
}

/// Plain text summary of rendered content.
///
/// Joins paragraph text with spaces, skips code blocks and truncates to
/// `max_chars` characters with a trailing ellipsis. Used as a fallback page
/// description when a post has no excerpt.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let mut words = Vec::new();
    for block in render(content) {
        if let Block::Paragraph(children) = block {
            let text: String = children.iter().map(Inline::plain_text).collect();
            words.extend(text.split_whitespace().map(str::to_string));
        }
    }

    let joined = words.join(" ");
    if joined.chars().count() <= max_chars {
        return joined;
    }

    let truncated: String = joined.chars().take(max_chars).collect();
    format!("{}…", truncated.trim_end())
}

/// Groups inline nodes into paragraphs.
///
/// Newlines are counted between pieces of visible content: one pending
/// newline becomes a line break, two or more close the paragraph. Newlines
/// at the edges of a paragraph produce nothing.
#[derive(Debug, Default)]
struct ParagraphAssembler {
    blocks: Vec<Block>,
    current: Vec<Inline>,
    pending_newlines: usize,
}

impl ParagraphAssembler {
    fn push(&mut self, node: Inline) {
        match node {
            Inline::Text(text) => self.push_text(&text),
            Inline::LineBreak => self.pending_newlines += 1,
            other => self.push_content(other),
        }
    }

    fn push_text(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.pending_newlines += 1;
            }
            if !line.is_empty() {
                self.push_content(Inline::text(line));
            }
        }
    }

    fn push_content(&mut self, node: Inline) {
        if !self.current.is_empty() {
            match self.pending_newlines {
                0 => {}
                1 => self.current.push(Inline::LineBreak),
                _ => self.flush(),
            }
        }
        self.pending_newlines = 0;
        self.current.push(node);
    }

    fn push_code(&mut self, code: &str) {
        self.flush();
        self.pending_newlines = 0;
        self.blocks.push(Block::code(code));
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.blocks
                .push(Block::Paragraph(std::mem::take(&mut self.current)));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}
