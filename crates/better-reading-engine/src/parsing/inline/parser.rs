use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Comment, CommentKind},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (a paragraph's or heading's content span)
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them,
/// so `` `%% not a comment %%` `` is a code span.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_comment(&mut cur, CommentKind::Percent))
            .or_else(|| try_parse_comment(&mut cur, CommentKind::Html));
        if let Some(node) = node {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        // An unmatched backtick run is literal as a whole.
        if cur.eat_run(CodeSpan::TICK) == 0 {
            cur.bump();
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if no closing run of equal length
/// follows. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    let open_len = cur.eat_run(CodeSpan::TICK);
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            let inner_end = cur.pos();
            if cur.eat_run(CodeSpan::TICK) == open_len {
                return Some(InlineNode::CodeSpan {
                    full: Span {
                        start,
                        end: cur.pos(),
                    },
                    inner: Span {
                        start: inner_start,
                        end: inner_end,
                    },
                });
            }
            continue;
        }
        cur.bump();
    }

    *cur = saved;
    None
}

/// Attempts to parse an inline comment of `kind` at the current position.
///
/// On failure (not at the opener, or never closed) the cursor is restored.
fn try_parse_comment(cur: &mut Cursor<'_>, kind: CommentKind) -> Option<InlineNode> {
    let open = Comment::open_delim(kind);
    if !cur.starts_with(open) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open.len());
    let close = Comment::close_delim(kind);
    if !cur.seek(close) {
        *cur = saved;
        return None;
    }
    cur.bump_n(close.len());

    Some(InlineNode::Comment {
        full: Span {
            start,
            end: cur.pos(),
        },
        kind,
    })
}
