//! Inline markup: links and emphasis inside text segments.
//!
//! Links are located first on the untouched segment text. Emphasis is then
//! searched only in the plain runs between links, so link labels are never
//! formatted. Each emphasis style is searched independently and the
//! candidates are merged by start offset; the first span wins and any span
//! starting inside it is dropped, leaving its markers as literal text.
//! Spans never nest.

use super::block::Inline;

/// Emphasis style of a formatting span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Underline,
}

impl Style {
    fn wrap(self, inner: &str) -> Inline {
        let inner = inner.to_string();
        match self {
            Style::Bold => Inline::Bold(inner),
            Style::Italic => Inline::Italic(inner),
            Style::Underline => Inline::Underline(inner),
        }
    }
}

/// Emphasis candidate over a plain run. Offsets are byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingSpan {
    pub style: Style,
    /// First byte of the opening marker.
    pub start: usize,
    /// One past the last byte of the closing marker.
    pub end: usize,
    marker_len: usize,
}

impl FormattingSpan {
    fn inner<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + self.marker_len..self.end - self.marker_len]
    }
}

/// `[label](target)` occurrence in a text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub label: &'a str,
    pub target: &'a str,
}

/// Converts one text segment into inline nodes.
///
/// Newlines are left inside `Text` nodes; paragraph assembly splits them.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut pos = 0;

    for link in find_links(text) {
        format_into(&text[pos..link.start], &mut nodes);
        nodes.push(Inline::link(link.label, link.target));
        pos = link.end;
    }
    format_into(&text[pos..], &mut nodes);

    nodes
}

/// Finds all non-overlapping links, leftmost first.
pub fn find_links(text: &str) -> Vec<LinkSpan<'_>> {
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('[') {
        let start = pos + offset;
        match link_at(text, start) {
            Some(link) => {
                pos = link.end;
                links.push(link);
            }
            None => pos = start + 1,
        }
    }

    links
}

/// Matches `[label](target)` beginning exactly at `start`.
///
/// The label runs to the first `]` and the target to the first `)`; both
/// must be non-empty and the `(` must follow the `]` directly.
fn link_at(text: &str, start: usize) -> Option<LinkSpan<'_>> {
    let label_start = start + 1;
    let label_end = label_start + text[label_start..].find(']')?;
    if label_end == label_start {
        return None;
    }

    let paren = label_end + 1;
    if !text[paren..].starts_with('(') {
        return None;
    }

    let target_start = paren + 1;
    let target_end = target_start + text[target_start..].find(')')?;
    if target_end == target_start {
        return None;
    }

    Some(LinkSpan {
        start,
        end: target_end + 1,
        label: &text[label_start..label_end],
        target: &text[target_start..target_end],
    })
}

/// Collects emphasis candidates of every style, ordered by start offset.
pub fn find_spans(text: &str) -> Vec<FormattingSpan> {
    let mut spans = Vec::new();
    spans.extend(find_paired(text, "**", Style::Bold));
    spans.extend(find_paired(text, "__", Style::Bold));
    spans.extend(find_single(text, b'*'));
    spans.extend(find_single(text, b'_'));
    spans.extend(find_paired(text, "++", Style::Underline));

    // Stable: equal starts keep the search order above.
    spans.sort_by_key(|span| span.start);
    spans
}

/// Applies emphasis to a plain run, first match wins.
fn format_into(text: &str, nodes: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }

    let mut cursor = 0;
    for span in find_spans(text) {
        if span.start < cursor {
            continue;
        }
        if span.start > cursor {
            nodes.push(Inline::text(&text[cursor..span.start]));
        }
        nodes.push(span.style.wrap(span.inner(text)));
        cursor = span.end;
    }

    if cursor < text.len() {
        nodes.push(Inline::text(&text[cursor..]));
    }
}

/// Finds `<marker>inner<marker>` pairs with the nearest closing marker.
///
/// The inner text is non-empty and stays on one line.
fn find_paired(text: &str, marker: &str, style: Style) -> Vec<FormattingSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(marker) {
        let start = pos + offset;
        let inner_start = start + marker.len();

        let Some(first) = text[inner_start..].chars().next() else {
            break;
        };
        let search_from = inner_start + first.len_utf8();

        let close = text[search_from..]
            .find(marker)
            .map(|offset| search_from + offset)
            .filter(|&close| !text[inner_start..close].contains('\n'));

        match close {
            Some(close) => {
                let end = close + marker.len();
                spans.push(FormattingSpan {
                    style,
                    start,
                    end,
                    marker_len: marker.len(),
                });
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    spans
}

/// Finds single-character italic spans.
///
/// Neither marker may touch another copy of the same character, so the
/// halves of a bold marker are never consumed.
fn find_single(text: &str, marker: u8) -> Vec<FormattingSpan> {
    let bytes = text.as_bytes();
    let is_lone = |i: usize| {
        bytes[i] == marker
            && (i == 0 || bytes[i - 1] != marker)
            && bytes.get(i + 1) != Some(&marker)
    };

    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_lone(pos) {
            pos += 1;
            continue;
        }

        let start = pos;
        let Some(first) = text[start + 1..].chars().next() else {
            break;
        };
        let mut close = None;
        for j in start + 1 + first.len_utf8()..bytes.len() {
            if bytes[j] == b'\n' {
                break;
            }
            if is_lone(j) {
                close = Some(j);
                break;
            }
        }

        // The first inner character may itself be a newline.
        let close = close.filter(|&j| !text[start + 1..j].contains('\n'));

        match close {
            Some(j) => {
                spans.push(FormattingSpan {
                    style: Style::Italic,
                    start,
                    end: j + 1,
                    marker_len: 1,
                });
                pos = j + 1;
            }
            None => pos = start + 1,
        }
    }

    spans
}
