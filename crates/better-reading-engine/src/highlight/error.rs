use thiserror::Error;

/// Failures inside the highlighting engine.
///
/// None of these reach the host: each is scoped to the smallest unit of work
/// (one rule at construction, one visible sub-range, one text node) and logged.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("invalid word pattern for rule '{name}': {source}")]
    Pattern { name: String, source: regex::Error },

    #[error("range {start}..{end} is invalid for a document of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },

    #[error("rebuilt fragment has {actual} bytes, source text has {expected}")]
    FragmentMismatch { expected: usize, actual: usize },
}
