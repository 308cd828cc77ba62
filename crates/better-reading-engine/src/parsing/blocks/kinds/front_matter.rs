use xi_rope::Rope;

use crate::parsing::rope::{lines_with_spans, span::Span};

/// YAML front matter fenced by `---` at the very start of a document.
pub struct FrontMatter;

impl FrontMatter {
    pub const OPEN: &'static str = "---";
    pub const CLOSE: [&'static str; 2] = ["---", "..."];

    /// Returns the span of the front matter block, delimiters included.
    ///
    /// Only a closed block on the first line counts; an unterminated `---`
    /// is left to the block parser.
    pub fn detect(rope: &Rope) -> Option<Span> {
        let mut lines = lines_with_spans(rope);
        let first = lines.next()?;
        if first.text.trim_end() != Self::OPEN {
            return None;
        }
        lines
            .find(|lr| Self::CLOSE.contains(&lr.text.trim_end()))
            .map(|close| Span {
                start: first.span.start,
                end: close.span.end,
            })
    }
}
