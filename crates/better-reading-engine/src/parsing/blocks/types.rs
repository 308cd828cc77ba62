use crate::parsing::rope::span::Span;

use super::kinds::{CommentKind, FenceKind};

/// A frame in the container stack representing a nesting level.
///
/// Containers wrap leaf blocks (paragraphs, code blocks) and can nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container with its nesting depth.
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: u8,
    },
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// An ATX heading.
    Heading { level: u8 },
    /// A fenced code block (``` or ~~~).
    FencedCode { kind: FenceKind },
    /// Lines indented by four or more columns.
    IndentedCode,
    /// YAML front matter at the top of the document.
    FrontMatter,
    /// A block-level comment.
    Comment { kind: CommentKind },
}

impl BlockKind {
    /// Whether inline parsing applies to this block's content.
    pub fn has_inline_content(&self) -> bool {
        matches!(self, BlockKind::Paragraph | BlockKind::Heading { .. })
    }
}

/// A parsed block node with its containers, kind, and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The container stack this block is nested within.
    pub containers: Vec<ContainerFrame>,
    /// The kind of leaf block.
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Content span for inline parsing (excludes prefixes like `>` or `#`).
    pub content_span: Span,
}
