//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: backtick runs, a raw zone that suppresses other parsing
//! - Comments reuse the block-level [`Comment`] delimiters (`%%`, `<!--`/`-->`)
//!
//! The parser calls these constants; it never hardcodes delimiters.

pub mod code_span;

pub use crate::parsing::blocks::kinds::{Comment, CommentKind};
pub use code_span::CodeSpan;
