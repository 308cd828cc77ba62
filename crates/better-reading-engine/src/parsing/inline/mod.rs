//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! Inline parsing is separate from block parsing and operates over the full
//! content span of inline-eligible blocks (paragraphs and headings).
//!
//! - Code spans suppress all other inline parsing inside them
//! - Comments (`%%…%%`, `<!--…-->`) are recognised only outside code spans
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Comment)
//! - **`kinds`**: Inline-specific delimiter constants
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
