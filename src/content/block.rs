//! Display nodes produced by the content renderer.

/// Top level renderable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Run of inline nodes separated from its neighbours by a blank line.
    Paragraph(Vec<Inline>),
    /// Fenced code, content kept verbatim.
    Code(CodeBlock),
}

impl Block {
    /// Builds a paragraph block from inline children.
    pub fn paragraph(children: impl Into<Vec<Inline>>) -> Self {
        Block::Paragraph(children.into())
    }

    /// Builds a code block from the text found between two fences.
    pub fn code(content: impl Into<String>) -> Self {
        Block::Code(CodeBlock::new(content))
    }
}

/// Inline node inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Underline(String),
    Link { label: String, target: String },
    LineBreak,
}

impl Inline {
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text(content.into())
    }

    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Inline::Link {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Visible text of the node, markers stripped.
    ///
    /// Line breaks contribute a single newline so callers can rebuild
    /// readable plain text from a paragraph.
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Bold(s) | Inline::Italic(s) | Inline::Underline(s) => s,
            Inline::Link { label, .. } => label,
            Inline::LineBreak => "\n",
        }
    }
}

/// Info strings accepted as a code block language hint.
pub const LANGUAGE_HINTS: &[&str] = &[
    "bash", "c", "c++", "clojure", "cpp", "cs", "csharp", "css", "diff", "erlang", "go",
    "haskell", "html", "java", "javascript", "js", "json", "jsx", "kotlin", "latex", "lisp",
    "lua", "makefile", "markdown", "md", "objc", "ocaml", "perl", "php", "py", "python", "r",
    "rb", "ruby", "rs", "rust", "scala", "sh", "shell", "sql", "swift", "toml", "ts", "tsx",
    "typescript", "xml", "yaml", "yml", "zsh",
];

/// Code found between a pair of fence markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    content: String,
}

impl CodeBlock {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Raw text between the fences, including any info string line.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Language hint written right after the opening fence.
    ///
    /// Recognised only when the first line is exactly one of
    /// [`LANGUAGE_HINTS`] and more lines follow, so a block starting with an
    /// ordinary word keeps that line. Content is never rewritten; see
    /// [`CodeBlock::body`] for the text without the hint line.
    pub fn language(&self) -> Option<&str> {
        let (first, _) = self.content.split_once('\n')?;
        let first = first.trim_end_matches('\r');
        LANGUAGE_HINTS.contains(&first).then_some(first)
    }

    /// Code without the language hint line.
    pub fn body(&self) -> &str {
        match self.language() {
            Some(_) => self
                .content
                .split_once('\n')
                .map(|(_, rest)| rest)
                .unwrap_or_default(),
            None => &self.content,
        }
    }
}
