//! The DOM rewriter: splits text leaves of a rendered tree in place.

use crate::highlight::{ContextFilter, RuleSet};

use super::{
    fragment::{Fragment, Segment},
    tree::{NodeId, RenderedTree, TextWalker},
};

pub const HIGHLIGHT_TAG: &str = "strong";
pub const HIGHLIGHT_CLASS: &str = "better-reading-highlight";

/// Counts from one [`Rewriter::rewrite`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Text leaves visited.
    pub leaves: usize,
    /// Leaves inside an excluded subtree.
    pub skipped: usize,
    /// Leaves replaced by a fragment.
    pub rewritten: usize,
    /// Emphasis elements inserted.
    pub emphasized: usize,
}

/// Applies a rule set to every eligible text leaf under a root.
#[derive(Debug, Clone, Copy)]
pub struct Rewriter<'r> {
    rules: &'r RuleSet,
    filter: ContextFilter,
}

impl<'r> Rewriter<'r> {
    pub fn new(rules: &'r RuleSet, filter: ContextFilter) -> Self {
        Self { rules, filter }
    }

    /// Rewrites the subtree under `root` in place.
    ///
    /// Call once per fresh render; emphasis elements from an earlier call
    /// would be split again. With `mode` off the tree is not touched.
    pub fn rewrite(&self, tree: &mut RenderedTree, root: NodeId, mode: bool) -> RewriteStats {
        let mut stats = RewriteStats::default();
        if !mode {
            return stats;
        }

        let mut leaves = vec![];
        let mut walker = tree.text_leaves(root);
        while let Some(leaf) = walker.next_leaf() {
            leaves.push(leaf);
        }

        for leaf in leaves {
            stats.leaves += 1;
            if self.filter.is_excluded(tree.categories_of(leaf)) {
                stats.skipped += 1;
                continue;
            }
            let Some(text) = tree.text(leaf) else {
                continue;
            };
            let fragment = Fragment::build(text, self.rules);
            if !fragment.has_emphasis() {
                continue;
            }
            if let Err(err) = fragment.verify(text) {
                log::warn!("leaving text node {leaf:?} untouched: {err}");
                continue;
            }

            let nodes = fragment
                .segments()
                .iter()
                .map(|segment| match segment {
                    Segment::Text(s) => tree.create_text(s),
                    Segment::Emphasis(s) => {
                        let el = tree.create_element(HIGHLIGHT_TAG, &[("class", HIGHLIGHT_CLASS)]);
                        tree.append_text(el, s);
                        el
                    }
                })
                .collect();
            tree.replace_with(leaf, nodes);
            stats.rewritten += 1;
            stats.emphasized += fragment.emphasis_count();
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Category, CategorySet};
    use pretty_assertions::assert_eq;

    fn paragraph(text: &str) -> RenderedTree {
        let mut tree = RenderedTree::new("div");
        let p = tree.append_element(tree.root(), "p", &[]);
        tree.append_text(p, text);
        tree
    }

    #[test]
    fn splits_text_into_strong_and_plain() {
        let mut tree = paragraph("the quick fox");
        let rules = RuleSet::default();
        let root = tree.root();
        let stats = Rewriter::new(&rules, ContextFilter::rendered_default()).rewrite(&mut tree, root, true);
        assert_eq!(
            stats,
            RewriteStats {
                leaves: 1,
                skipped: 0,
                rewritten: 1,
                emphasized: 3
            }
        );
        let p = tree.children(root)[0];
        let tags: Vec<_> = tree.children(p).iter().map(|&c| tree.tag(c)).collect();
        assert_eq!(
            tags,
            vec![Some("strong"), None, Some("strong"), None, Some("strong"), None]
        );
        assert_eq!(tree.attr(tree.children(p)[0], "class"), Some(HIGHLIGHT_CLASS));
        assert_eq!(tree.text_content(root), "the quick fox");
    }

    #[test]
    fn mode_off_leaves_tree_alone() {
        let mut tree = paragraph("untouched words");
        let rules = RuleSet::default();
        let root = tree.root();
        let stats = Rewriter::new(&rules, ContextFilter::rendered_default()).rewrite(&mut tree, root, false);
        assert_eq!(stats, RewriteStats::default());
        let p = tree.children(root)[0];
        assert_eq!(tree.children(p).len(), 1);
    }

    #[test]
    fn preformatted_subtrees_are_skipped() {
        let mut tree = RenderedTree::new("div");
        let root = tree.root();
        let pre = tree.append_element(root, "pre", &[]);
        let code = tree.append_element(pre, "code", &[]);
        let leaf = tree.append_text(code, "let words = here;");
        let rules = RuleSet::default();
        let stats = Rewriter::new(&rules, ContextFilter::rendered_default()).rewrite(&mut tree, root, true);
        assert_eq!(stats.skipped, 1);
        assert_eq!(tree.children(code), &[leaf]);
    }

    #[test]
    fn excluded_categories_are_configurable() {
        let mut tree = RenderedTree::new("div");
        let root = tree.root();
        let h1 = tree.append_element(root, "h1", &[]);
        tree.append_text(h1, "Title");
        let filter = ContextFilter::new(CategorySet::EMPTY.with(Category::Heading));
        let rules = RuleSet::default();
        let stats = Rewriter::new(&rules, filter).rewrite(&mut tree, root, true);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.rewritten, 0);
    }

    #[test]
    fn punctuation_only_leaf_is_not_replaced() {
        let mut tree = paragraph("-- 42 --");
        let rules = RuleSet::default();
        let root = tree.root();
        let stats = Rewriter::new(&rules, ContextFilter::rendered_default()).rewrite(&mut tree, root, true);
        assert_eq!(stats.rewritten, 0);
        assert_eq!(tree.text_content(root), "-- 42 --");
    }
}
