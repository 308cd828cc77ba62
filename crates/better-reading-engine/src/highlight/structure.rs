//! Structural annotation of a markdown rope for the live view.

use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::InlineNode,
    parse_document, parse_inline_for_block,
    rope::Span,
};

use super::category::{Category, CategorySet, StructureQuery};

/// A region of the document and the category that covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub span: Span,
    pub category: Category,
}

/// Categorised zones of one document version.
///
/// Block zones never overlap each other, nor do inline zones; an inline zone
/// always sits inside the block it was parsed from.
#[derive(Debug, Clone, Default)]
pub struct MarkdownStructure {
    blocks: Vec<Zone>,
    inline: Vec<Zone>,
}

impl MarkdownStructure {
    pub fn parse(rope: &Rope) -> Self {
        let doc = parse_document(rope);
        let mut structure = Self::default();
        for block in &doc.blocks {
            if let Some(category) = block_category(block) {
                structure.blocks.push(Zone {
                    span: block.span,
                    category,
                });
            }
            for node in parse_inline_for_block(rope, block) {
                let category = match node {
                    InlineNode::Text(_) => continue,
                    InlineNode::CodeSpan { .. } => Category::InlineCode,
                    InlineNode::Comment { .. } => Category::Comment,
                };
                structure.inline.push(Zone {
                    span: node.span(),
                    category,
                });
            }
        }
        structure.blocks.sort_by_key(|z| z.span.start);
        structure.inline.sort_by_key(|z| z.span.start);
        structure
    }

    /// All zones ordered by start offset.
    pub fn zones(&self) -> Vec<Zone> {
        let mut zones: Vec<Zone> = self.blocks.iter().chain(&self.inline).copied().collect();
        zones.sort_by_key(|z| z.span.start);
        zones
    }
}

fn block_category(block: &BlockNode) -> Option<Category> {
    match block.kind {
        BlockKind::Paragraph => None,
        BlockKind::Heading { .. } => Some(Category::Heading),
        BlockKind::FencedCode { .. } | BlockKind::IndentedCode => Some(Category::CodeBlock),
        BlockKind::FrontMatter => Some(Category::FrontMatter),
        BlockKind::Comment { .. } => Some(Category::Comment),
    }
}

fn covering(zones: &[Zone], pos: usize) -> Option<Category> {
    let idx = zones.partition_point(|z| z.span.start <= pos);
    let zone = zones[..idx].last()?;
    zone.span.contains(pos).then_some(zone.category)
}

impl StructureQuery for MarkdownStructure {
    fn categories_at(&self, pos: usize) -> CategorySet {
        [covering(&self.blocks, pos), covering(&self.inline, pos)]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(md: &str, needle: &str) -> CategorySet {
        let structure = MarkdownStructure::parse(&Rope::from(md));
        let pos = md.find(needle).unwrap();
        structure.categories_at(pos)
    }

    #[test]
    fn prose_has_no_categories() {
        assert!(at("just words here\n", "words").is_empty());
    }

    #[test]
    fn fenced_code_body() {
        let md = "intro\n\n```\nlet inside = 1;\n```\n";
        assert_eq!(at(md, "inside").iter().collect::<Vec<_>>(), vec![Category::CodeBlock]);
    }

    #[test]
    fn inline_code_inside_heading() {
        let md = "# Run `cargo` now\n";
        let set = at(md, "cargo");
        assert!(set.contains(Category::Heading));
        assert!(set.contains(Category::InlineCode));
        assert!(!at(md, "now").contains(Category::InlineCode));
    }

    #[test]
    fn front_matter_and_comments() {
        let md = "---\ntitle: x\n---\ntext %%hidden%% shown\n<!--\nblock\n-->\n";
        assert!(at(md, "title").contains(Category::FrontMatter));
        assert!(at(md, "hidden").contains(Category::Comment));
        assert!(at(md, "shown").is_empty());
        assert!(at(md, "block").contains(Category::Comment));
    }

    #[test]
    fn zones_are_ordered() {
        let md = "# A `b`\n\n    code\n";
        let zones = MarkdownStructure::parse(&Rope::from(md)).zones();
        let categories: Vec<_> = zones.iter().map(|z| z.category).collect();
        assert_eq!(
            categories,
            vec![Category::Heading, Category::InlineCode, Category::CodeBlock]
        );
        assert!(zones.windows(2).all(|w| w[0].span.start <= w[1].span.start));
    }

    #[test]
    fn past_end_is_uncovered() {
        let structure = MarkdownStructure::parse(&Rope::from("```\nx\n```\n"));
        assert!(structure.categories_at(1_000).is_empty());
    }
}
