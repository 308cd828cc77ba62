use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking during block parsing.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Returns the byte offset where the line containing `offset` begins.
///
/// `offset` is clamped to the rope length.
pub fn line_start(rope: &Rope, offset: usize) -> usize {
    let offset = offset.min(rope.len());
    rope.offset_of_line(rope.line_of_offset(offset))
}

/// Widens `sp` to whole lines: from the start of its first line to the end
/// of its last line (including the newline, if any).
pub fn line_bounds(rope: &Rope, sp: Span) -> Span {
    let len = rope.len();
    let start = line_start(rope, sp.start);
    let end_line = rope.line_of_offset(sp.end.min(len));
    let end = if end_line >= rope.line_of_offset(len) {
        len
    } else {
        rope.offset_of_line(end_line + 1)
    };
    Span { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_their_newlines() {
        let rope = Rope::from("ab\ncd\n");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "ab\n");
        assert_eq!(lines[1].span, Span { start: 3, end: 6 });
    }

    #[test]
    fn line_start_of_middle_offset() {
        let rope = Rope::from("first\nsecond\nthird");
        assert_eq!(line_start(&rope, 0), 0);
        assert_eq!(line_start(&rope, 8), 6);
        assert_eq!(line_start(&rope, 13), 13);
    }

    #[test]
    fn line_start_clamps_past_end() {
        let rope = Rope::from("one\ntwo");
        assert_eq!(line_start(&rope, 100), 4);
    }

    #[test]
    fn line_bounds_widen_to_full_lines() {
        let rope = Rope::from("first\nsecond\nthird");
        assert_eq!(line_bounds(&rope, Span::new(8, 9)), Span::new(6, 13));
        assert_eq!(line_bounds(&rope, Span::new(2, 15)), Span::new(0, 18));
    }
}
