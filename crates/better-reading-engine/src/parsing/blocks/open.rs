use super::kinds::{CodeFence, Comment, CommentKind, FenceSig, Heading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { sig: FenceSig },
    Heading { level: u8, content_offset: usize },
    Comment { kind: CommentKind, closed: bool },
}

/// Detects a leaf block opener on a non-indented line.
pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(sig) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode { sig });
    }
    if let Some((level, content_offset)) = Heading::open(remainder) {
        return Some(BlockOpen::Heading {
            level,
            content_offset,
        });
    }
    if let Some((kind, closed)) = Comment::open(remainder) {
        return Some(BlockOpen::Comment { kind, closed });
    }
    None
}
