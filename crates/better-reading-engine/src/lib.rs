pub mod highlight;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use highlight::{
    Category, CategorySet, ContextFilter, EmphasisRange, Granularity, HighlightError,
    HighlightRule, LiveView, MarkdownStructure, RangeBuilder, RuleSet, ScriptCoverage,
    StructureQuery, ViewState, emphasis_len,
};
pub use parsing::rope::Span;
pub use render::{Fragment, RenderedTree, Rewriter, render_markdown};
pub use xi_rope::Rope;
