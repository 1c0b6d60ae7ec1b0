//! Code fence extraction.

/// Delimiter opening and closing a code block.
pub const FENCE: &str = "```";

/// Span of the raw content on one side of a fence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Code(&'a str),
}

/// Splits content into alternating text and code segments.
///
/// Fence markers are consumed in pairs. When the count is odd, the last
/// marker has no partner and stays in the trailing text segment together
/// with everything after it. Empty text segments are dropped; empty code
/// segments are kept because an empty fence pair is still a code block.
///
/// # Arguments
///
/// * `content`: Raw post body
///
/// # Returns
///
/// Segments in document order
pub fn split_fences(content: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while let Some(open) = content[pos..].find(FENCE) {
        let open = pos + open;
        let code_start = open + FENCE.len();

        let Some(close) = content[code_start..].find(FENCE) else {
            break;
        };
        let close = code_start + close;

        if open > pos {
            segments.push(Segment::Text(&content[pos..open]));
        }
        segments.push(Segment::Code(&content[code_start..close]));

        pos = close + FENCE.len();
    }

    if pos < content.len() {
        segments.push(Segment::Text(&content[pos..]));
    }

    segments
}
