/// Code span inline syntax.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
/// An opening backtick run is closed only by a run of the same length.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
