use crate::parsing::rope::span::Span;

/// The emphasized prefix of one matched word, as absolute byte offsets.
///
/// Always `from < to`, and always inside the word it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmphasisRange {
    pub from: usize,
    pub to: usize,
}

impl EmphasisRange {
    pub fn span(self) -> Span {
        Span {
            start: self.from,
            end: self.to,
        }
    }
}

/// One token found by the word tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedWord<'t> {
    /// Absolute start offset.
    pub from: usize,
    /// Absolute end offset, always greater than `from`.
    pub to: usize,
    /// The literal matched text.
    pub text: &'t str,
}
