use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_to_string_full_span() {
        let rope = Rope::from("hello world");
        let sp = Span { start: 0, end: 11 };
        assert_eq!(slice_to_string(&rope, sp), "hello world");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        let sp = Span { start: 6, end: 11 };
        assert_eq!(slice_to_string(&rope, sp), "world");
    }
}
