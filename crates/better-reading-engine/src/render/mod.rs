//! # Rendered View
//!
//! A minimal document tree, the markdown renderer that fills it, and the
//! rewriter that splits its text leaves into plain text and
//! `<strong class="better-reading-highlight">` prefixes.

pub mod fragment;
pub mod html;
pub mod markdown;
pub mod rewrite;
pub mod tree;

pub use fragment::{Fragment, Segment};
pub use markdown::render_markdown;
pub use rewrite::{HIGHLIGHT_CLASS, HIGHLIGHT_TAG, RewriteStats, Rewriter};
pub use tree::{NodeId, NodeKind, RenderedTree, TextLeaves, TextWalker};
