//! # Word Emphasis
//!
//! The highlighting engine shared by both views. A [`RuleSet`] pairs word
//! patterns with the prefix rule; a [`ContextFilter`] drops words that sit in
//! excluded structural zones.
//!
//! - The live view ([`RangeBuilder`], [`LiveView`]) turns visible sub-ranges
//!   of a rope into sorted, non-overlapping [`EmphasisRange`]s.
//! - The rendered view (`crate::render`) splits text nodes of a rendered
//!   tree into plain and emphasized pieces.
//!
//! Both call [`HighlightRule::emphasis_for`], so they agree on which
//! characters are emphasized.

pub mod category;
pub mod context;
pub mod error;
pub mod live;
pub mod ranges;
pub mod rule;
pub mod structure;
pub mod tokenizer;
pub mod types;

pub use category::{Category, CategorySet, StructureQuery};
pub use context::{ContextFilter, Granularity};
pub use error::HighlightError;
pub use live::{LiveView, ViewState};
pub use ranges::{RangeBuilder, Run, runs};
pub use rule::{EmphasisFn, HighlightRule, RuleFlags, RuleSet, ScriptCoverage, emphasis_len};
pub use structure::{MarkdownStructure, Zone};
pub use tokenizer::{WordTokenizer, Words};
pub use types::{EmphasisRange, MatchedWord};
