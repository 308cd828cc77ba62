//! # Markdown Structure Parsing
//!
//! A lossless block + inline parser over an `xi_rope::Rope`. Its only job is
//! to locate the regions where word emphasis must not apply: code, front
//! matter, comments and headings. Every node stores byte spans into the rope.

pub mod blocks;
pub mod inline;
pub mod rope;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier, kinds::FrontMatter};
use rope::{lines_with_spans, slice::slice_to_string};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    let mut blocks = vec![];

    let front_matter = FrontMatter::detect(rope);
    if let Some(span) = front_matter {
        blocks.push(BlockNode {
            containers: vec![],
            kind: BlockKind::FrontMatter,
            span,
            content_span: span,
        });
    }
    let body_start = front_matter.map_or(0, |sp| sp.end);

    for lr in lines_with_spans(rope).filter(|lr| lr.span.start >= body_start) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    blocks.extend(builder.finish());
    ParsedDoc { blocks }
}

/// Inline parse for a block node; empty for blocks without inline content.
pub fn parse_inline_for_block(rope: &Rope, b: &BlockNode) -> Vec<inline::InlineNode> {
    if !b.kind.has_inline_content() {
        return vec![];
    }
    let s = slice_to_string(rope, b.content_span);
    inline::parse_inline(b.content_span.start, &s)
}
