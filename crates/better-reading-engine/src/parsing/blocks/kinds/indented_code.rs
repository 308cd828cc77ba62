/// Indented code block syntax.
///
/// A line indented by four or more columns opens (or continues) an indented
/// code block, unless it would continue a paragraph.
pub struct IndentedCode;

impl IndentedCode {
    pub const MIN_INDENT: usize = 4;
    const TAB_STOP: usize = 4;

    /// Counts leading indentation in columns, expanding tabs to the next stop.
    pub fn indent_columns(s: &str) -> usize {
        let mut cols = 0;
        for b in s.bytes() {
            match b {
                b' ' => cols += 1,
                b'\t' => cols += Self::TAB_STOP - cols % Self::TAB_STOP,
                _ => break,
            }
        }
        cols
    }
}
