use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    kinds::{CodeFence, Comment, CommentKind, FenceSig, IndentedCode},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        content_start: Span,
        last_line_end: usize,
    },
    Fence {
        sig: FenceSig,
        start: Span,
        last_line_end: usize,
    },
    Indented {
        start: Span,
        /// End of the last non-blank line; trailing blank lines are not code.
        last_line_end: usize,
    },
    Comment {
        kind: CommentKind,
        start: Span,
        last_line_end: usize,
    },
}

/// Builds block nodes from classified lines, one line at a time.
pub struct BlockBuilder {
    containers: ContainerPath,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: ContainerPath::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        self.containers.set_blockquote_depth(c.quote_depth);

        match self.leaf {
            LeafState::Fence { .. } => return self.consume_fence_line(c),
            LeafState::Comment { .. } => return self.consume_comment_line(c),
            _ => {}
        }

        if c.is_blank {
            // Blank lines may sit inside indented code; only paragraphs end here.
            self.flush_paragraph();
            return;
        }

        if c.indent >= IndentedCode::MIN_INDENT {
            // Indented code cannot interrupt a paragraph: lazy continuation.
            if matches!(self.leaf, LeafState::Paragraph { .. }) {
                self.extend_paragraph(c.line, c.remainder_span);
            } else {
                self.extend_indented(c.line);
            }
            return;
        }

        self.flush_indented();

        if let Some(open) = try_open_leaf(&c.remainder_text) {
            self.flush_paragraph();
            self.open_leaf(open, c);
            return;
        }

        self.extend_paragraph(c.line, c.remainder_span);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_indented();
        self.flush_unterminated();
        self.out
    }

    fn emit(&mut self, kind: BlockKind, span: Span, content_span: Span) {
        self.out.push(BlockNode {
            containers: self.containers.frames(),
            kind,
            span,
            content_span,
        });
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        match open {
            BlockOpen::FencedCode { sig } => {
                self.leaf = LeafState::Fence {
                    sig,
                    start: c.line,
                    last_line_end: c.line.end,
                }
            }
            BlockOpen::Heading {
                level,
                content_offset,
            } => {
                let content_start =
                    (c.remainder_span.start + content_offset).min(c.remainder_span.end);
                self.emit(
                    BlockKind::Heading { level },
                    c.line,
                    Span {
                        start: content_start,
                        end: c.remainder_span.end,
                    },
                );
            }
            BlockOpen::Comment { kind, closed: true } => {
                self.emit(BlockKind::Comment { kind }, c.line, c.line);
            }
            BlockOpen::Comment {
                kind,
                closed: false,
            } => {
                self.leaf = LeafState::Comment {
                    kind,
                    start: c.line,
                    last_line_end: c.line.end,
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { sig, start, .. } = self.leaf else {
            return;
        };

        self.leaf = LeafState::Fence {
            sig,
            start,
            last_line_end: c.line.end,
        };

        if CodeFence::closes(sig, c.fence_sig) {
            let span = Span {
                start: start.start,
                end: c.line.end,
            };
            self.emit(BlockKind::FencedCode { kind: sig.kind }, span, span);
            self.leaf = LeafState::None;
        }
    }

    fn consume_comment_line(&mut self, c: &LineClass) {
        let LeafState::Comment { kind, start, .. } = self.leaf else {
            return;
        };

        if Comment::closes(kind, &c.remainder_text) {
            let span = Span {
                start: start.start,
                end: c.line.end,
            };
            self.emit(BlockKind::Comment { kind }, span, span);
            self.leaf = LeafState::None;
        } else {
            self.leaf = LeafState::Comment {
                kind,
                start,
                last_line_end: c.line.end,
            };
        }
    }

    fn extend_paragraph(&mut self, line: Span, content_span: Span) {
        match self.leaf {
            LeafState::Paragraph {
                start,
                content_start,
                ..
            } => {
                self.leaf = LeafState::Paragraph {
                    start,
                    content_start,
                    last_line_end: line.end,
                };
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: line,
                    content_start: content_span,
                    last_line_end: line.end,
                };
            }
        }
    }

    fn extend_indented(&mut self, line: Span) {
        let start = match self.leaf {
            LeafState::Indented { start, .. } => start,
            _ => line,
        };
        self.leaf = LeafState::Indented {
            start,
            last_line_end: line.end,
        };
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph {
            start,
            content_start,
            last_line_end,
        } = self.leaf
        {
            self.leaf = LeafState::None;
            self.emit(
                BlockKind::Paragraph,
                Span {
                    start: start.start,
                    end: last_line_end,
                },
                Span {
                    start: content_start.start,
                    end: last_line_end,
                },
            );
        }
    }

    fn flush_indented(&mut self) {
        if let LeafState::Indented {
            start,
            last_line_end,
        } = self.leaf
        {
            self.leaf = LeafState::None;
            let span = Span {
                start: start.start,
                end: last_line_end,
            };
            self.emit(BlockKind::IndentedCode, span, span);
        }
    }

    /// Unterminated fences and comments run to end of document.
    fn flush_unterminated(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::Fence {
                sig,
                start,
                last_line_end,
            } => {
                let span = Span {
                    start: start.start,
                    end: last_line_end,
                };
                self.emit(BlockKind::FencedCode { kind: sig.kind }, span, span);
            }
            LeafState::Comment {
                kind,
                start,
                last_line_end,
            } => {
                let span = Span {
                    start: start.start,
                    end: last_line_end,
                };
                self.emit(BlockKind::Comment { kind }, span, span);
            }
            other => self.leaf = other,
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
