/// Which comment syntax delimits a comment block or span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `<!-- ... -->`
    Html,
    /// `%% ... %%`
    Percent,
}

/// Comment syntax shared by block and inline parsing.
pub struct Comment;

impl Comment {
    pub const HTML_OPEN: &'static str = "<!--";
    pub const HTML_CLOSE: &'static str = "-->";
    pub const PERCENT: &'static str = "%%";

    pub fn open_delim(kind: CommentKind) -> &'static str {
        match kind {
            CommentKind::Html => Self::HTML_OPEN,
            CommentKind::Percent => Self::PERCENT,
        }
    }

    pub fn close_delim(kind: CommentKind) -> &'static str {
        match kind {
            CommentKind::Html => Self::HTML_CLOSE,
            CommentKind::Percent => Self::PERCENT,
        }
    }

    /// If `remainder` starts a comment block, returns its kind and whether
    /// the comment also closes on this line.
    pub fn open(remainder: &str) -> Option<(CommentKind, bool)> {
        let t = remainder.trim_start_matches(' ');
        let kind = if t.starts_with(Self::HTML_OPEN) {
            CommentKind::Html
        } else if t.starts_with(Self::PERCENT) {
            CommentKind::Percent
        } else {
            return None;
        };
        let rest = &t[Self::open_delim(kind).len()..];
        Some((kind, rest.contains(Self::close_delim(kind))))
    }

    /// Returns true if this line closes a comment block of `kind`.
    pub fn closes(kind: CommentKind, line: &str) -> bool {
        line.contains(Self::close_delim(kind))
    }
}
