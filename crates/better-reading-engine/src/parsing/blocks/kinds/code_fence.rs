/// Which delimiter character a fence uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence opener or closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the delimiter run (at least 3).
    pub len: usize,
    /// True when nothing but whitespace follows the run.
    pub bare: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;
    /// Fences may be indented by at most this many spaces.
    pub const MAX_INDENT: usize = 3;

    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.bytes().take_while(|&b| b == b' ').count();
        if indent > Self::MAX_INDENT {
            return None;
        }
        let t = &t[indent..];
        let (kind, ch) = match t.as_bytes().first() {
            Some(&Self::BACKTICK) => (FenceKind::Backticks, Self::BACKTICK),
            Some(&Self::TILDE) => (FenceKind::Tildes, Self::TILDE),
            _ => return None,
        };
        let len = t.bytes().take_while(|&b| b == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = &t[len..];
        // A backtick fence's info string may not itself contain backticks.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            bare: info.trim().is_empty(),
        })
    }

    /// A closer uses the same character, is at least as long as the opener
    /// and carries no info string.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        match sig {
            Some(s) => s.kind == open.kind && s.len >= open.len && s.bare,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(kind: FenceKind, len: usize, bare: bool) -> Option<FenceSig> {
        Some(FenceSig { kind, len, bare })
    }

    #[test]
    fn detect_backtick_fence_with_info() {
        assert_eq!(
            CodeFence::sig("```rust"),
            sig(FenceKind::Backticks, 3, false)
        );
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~~\n"), sig(FenceKind::Tildes, 4, true));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``not a fence"), None);
    }

    #[test]
    fn too_deeply_indented_is_not_a_fence() {
        assert_eq!(CodeFence::sig("    ```"), None);
        assert!(CodeFence::sig("   ```").is_some());
    }

    #[test]
    fn closes_matching_fence() {
        let open = FenceSig {
            kind: FenceKind::Backticks,
            len: 3,
            bare: false,
        };
        assert!(CodeFence::closes(open, CodeFence::sig("```")));
        assert!(CodeFence::closes(open, CodeFence::sig("`````")));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        let open = FenceSig {
            kind: FenceKind::Backticks,
            len: 4,
            bare: true,
        };
        assert!(!CodeFence::closes(open, CodeFence::sig("~~~~")));
        assert!(!CodeFence::closes(open, CodeFence::sig("```")));
        assert!(!CodeFence::closes(open, CodeFence::sig("````rust")));
    }
}
