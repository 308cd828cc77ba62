//! # Block Parsing
//!
//! Two-phase block parsing with a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, blockquote depth, fence detection, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` maintains a container stack
//!    and emits `BlockNode`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `ContainerFrame`)
//! - **`kinds`**: Block-specific syntax (quotes, fences, headings, comments,
//!   front matter, indented code)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerPath` for managing nested container state
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Code blocks, comments and front matter are raw zones: no inline parsing inside
//! - Unterminated fences and comments extend to end of document
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode, ContainerFrame};
