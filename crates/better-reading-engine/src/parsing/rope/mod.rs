pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, line_bounds, line_start, lines_with_spans};
pub use slice::slice_to_string;
pub use span::Span;
