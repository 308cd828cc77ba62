/// Blockquote container syntax.
///
/// Quote prefixes are stripped before leaf detection, so a fence or heading
/// inside a quote is recognised the same as at top level.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: u8 = b'>';

    /// Strips blockquote prefixes from a line, returning `(depth, byte_offset)`.
    ///
    /// Handles `> text`, `>> nested`, `> > spaced nested` and `>\ttab`.
    /// `byte_offset` indexes into `s` where content begins.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            let mut j = i;
            while j < b.len() && j - i < 3 && b[j] == b' ' {
                j += 1;
            }
            if b.get(j) != Some(&Self::PREFIX) {
                break;
            }
            depth = depth.saturating_add(1);
            i = j + 1;
            if matches!(b.get(i), Some(b' ') | Some(b'\t')) {
                i += 1;
            }
        }
        (depth, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, 2));
    }

    #[test]
    fn strip_spaced_nested_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> > hello"), (2, 4));
    }

    #[test]
    fn strip_tight_nested_quote() {
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), (2, 3));
    }

    #[test]
    fn leading_spaces_before_marker() {
        assert_eq!(BlockQuote::strip_prefixes("  > hi"), (1, 4));
    }

    #[test]
    fn four_spaces_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefixes("    > code"), (0, 0));
    }
}
