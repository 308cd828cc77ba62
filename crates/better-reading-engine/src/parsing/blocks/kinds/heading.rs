/// ATX heading syntax (`#` to `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns `(level, content_offset)` if `remainder` opens an ATX heading.
    ///
    /// `content_offset` is the byte index in `remainder` where the heading
    /// text starts (after the marker run and one separating space).
    pub fn open(remainder: &str) -> Option<(u8, usize)> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.bytes().take_while(|&b| b == b' ').count();
        if indent > 3 {
            return None;
        }
        let level = t[indent..]
            .bytes()
            .take_while(|&b| b == Self::MARKER)
            .count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let after = indent + level;
        match t.as_bytes().get(after) {
            None => Some((level as u8, after)),
            Some(b' ') | Some(b'\t') => Some((level as u8, after + 1)),
            Some(_) => None,
        }
    }
}
