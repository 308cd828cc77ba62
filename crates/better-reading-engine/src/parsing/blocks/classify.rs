use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{BlockQuote, CodeFence, FenceSig, IndentedCode};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is blank (whitespace only after stripping prefixes).
    pub is_blank: bool,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// Leading indentation of the remainder, in columns.
    pub indent: usize,
    /// Byte span of the line content after stripping quote prefixes, newline excluded.
    pub remainder_span: Span,
    /// Text content after stripping prefixes.
    pub remainder_text: String,
    /// If the remainder looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim_end_matches(['\r', '\n']);
        let (qd, idx) = BlockQuote::strip_prefixes(trimmed);
        let remainder = &trimmed[idx..];

        LineClass {
            line: lr.span,
            is_blank: remainder.trim().is_empty(),
            quote_depth: qd,
            indent: IndentedCode::indent_columns(remainder),
            remainder_span: Span {
                start: lr.span.start + idx,
                end: lr.span.start + trimmed.len(),
            },
            remainder_text: remainder.to_string(),
            fence_sig: CodeFence::sig(remainder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, start: usize) -> LineRef {
        LineRef {
            span: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        }
    }

    #[test]
    fn quoted_line_strips_prefix() {
        let c = MarkdownLineClassifier.classify(&line("> hello\n", 10));
        assert_eq!(c.quote_depth, 1);
        assert_eq!(c.remainder_text, "hello");
        assert_eq!(c.remainder_span, Span { start: 12, end: 17 });
    }

    #[test]
    fn quote_marker_alone_is_blank() {
        let c = MarkdownLineClassifier.classify(&line(">\n", 0));
        assert!(c.is_blank);
    }

    #[test]
    fn indentation_is_measured_after_quotes() {
        let c = MarkdownLineClassifier.classify(&line(">     code\n", 0));
        assert_eq!(c.indent, 4);
    }
}
