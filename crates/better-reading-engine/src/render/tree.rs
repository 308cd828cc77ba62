//! An arena-backed rendered document tree.

use crate::highlight::{Category, CategorySet};

/// Handle to a node in a [`RenderedTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Element and text nodes with parent links.
///
/// Nodes are never freed; a replaced node is detached and its id stays valid.
#[derive(Debug, Clone)]
pub struct RenderedTree {
    nodes: Vec<Node>,
}

impl RenderedTree {
    /// A tree holding a single, empty `root_tag` element.
    pub fn new(root_tag: &str) -> Self {
        let mut tree = Self { nodes: vec![] };
        tree.create_element(root_tag, &[]);
        tree
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// A detached element.
    pub fn create_element(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_owned(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        })
    }

    /// A detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_owned()))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.create_element(tag, attrs);
        self.append_child(parent, id);
        id
    }

    /// Appends text under `parent`, extending its last child if that is
    /// already a text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        if let Some(&last) = self.children(parent).last()
            && let NodeKind::Text(existing) = &mut self.nodes[last.0].kind
        {
            existing.push_str(text);
            return last;
        }
        let id = self.create_text(text);
        self.append_child(parent, id);
        id
    }

    /// Puts `replacements` where `id` was, in order, and detaches `id`.
    ///
    /// Does nothing for a node without a parent.
    pub fn replace_with(&mut self, id: NodeId, replacements: Vec<NodeId>) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        let Some(index) = self.children(parent).iter().position(|&c| c == id) else {
            return;
        };
        for &r in &replacements {
            self.nodes[r.0].parent = Some(parent);
        }
        self.nodes[parent.0].children.splice(index..=index, replacements);
        self.nodes[id.0].parent = None;
    }

    /// Concatenated text of every text node under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut leaves = self.text_leaves(id);
        while let Some(leaf) = leaves.next_leaf() {
            out.push_str(self.text(leaf).unwrap_or_default());
        }
        out
    }

    /// `id`'s parent, grandparent and so on up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Categories implied by the element ancestors of `id`.
    pub fn categories_of(&self, id: NodeId) -> CategorySet {
        self.ancestors(id)
            .filter_map(|a| match self.tag(a)? {
                "pre" => Some(Category::Preformatted),
                "code" => Some(Category::InlineCode),
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Category::Heading),
                _ => None,
            })
            .collect()
    }

    /// Walks the text nodes under `root` in document order.
    pub fn text_leaves(&self, root: NodeId) -> TextLeaves<'_> {
        TextLeaves {
            tree: self,
            stack: vec![root],
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            kind,
            parent: None,
            children: vec![],
        });
        NodeId(self.nodes.len() - 1)
    }
}

/// Yields text-bearing leaves one at a time.
pub trait TextWalker {
    fn next_leaf(&mut self) -> Option<NodeId>;
}

/// Depth-first text leaf walk over a [`RenderedTree`].
pub struct TextLeaves<'t> {
    tree: &'t RenderedTree,
    stack: Vec<NodeId>,
}

impl TextWalker for TextLeaves<'_> {
    fn next_leaf(&mut self) -> Option<NodeId> {
        while let Some(id) = self.stack.pop() {
            match self.tree.kind(id) {
                NodeKind::Text(_) => return Some(id),
                NodeKind::Element { .. } => {
                    self.stack.extend(self.tree.children(id).iter().rev());
                }
            }
        }
        None
    }
}

impl Iterator for TextLeaves<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.next_leaf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> (RenderedTree, NodeId, NodeId) {
        let mut tree = RenderedTree::new("div");
        let root = tree.root();
        let p = tree.append_element(root, "p", &[]);
        let hello = tree.append_text(p, "hello ");
        let pre = tree.append_element(root, "pre", &[]);
        let code = tree.append_element(pre, "code", &[]);
        let inside = tree.append_text(code, "x = 1");
        tree.append_text(p, "world");
        (tree, hello, inside)
    }

    #[test]
    fn append_text_merges_adjacent_text() {
        let (tree, hello, _) = sample();
        assert_eq!(tree.text(hello), Some("hello world"));
    }

    #[test]
    fn leaves_in_document_order() {
        let (tree, hello, inside) = sample();
        let leaves: Vec<_> = tree.text_leaves(tree.root()).collect();
        assert_eq!(leaves, vec![hello, inside]);
        assert_eq!(tree.text_content(tree.root()), "hello worldx = 1");
    }

    #[test]
    fn categories_come_from_ancestors() {
        let (tree, hello, inside) = sample();
        assert!(tree.categories_of(hello).is_empty());
        let set = tree.categories_of(inside);
        assert!(set.contains(Category::Preformatted));
        assert!(set.contains(Category::InlineCode));
    }

    #[test]
    fn replace_with_keeps_position() {
        let mut tree = RenderedTree::new("p");
        let root = tree.root();
        let a = tree.append_text(root, "a");
        let em = tree.append_element(root, "em", &[]);
        let b = tree.create_text("b");
        let c = tree.create_text("c");
        tree.replace_with(a, vec![b, c]);
        assert_eq!(tree.children(root), &[b, c, em]);
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.parent(a), None);
    }

    #[test]
    fn replacing_root_is_a_no_op() {
        let mut tree = RenderedTree::new("div");
        let root = tree.root();
        let other = tree.create_text("x");
        tree.replace_with(root, vec![other]);
        assert_eq!(tree.children(root), &[] as &[NodeId]);
    }

    #[test]
    fn attributes_are_looked_up_by_name() {
        let mut tree = RenderedTree::new("div");
        let a = tree.append_element(tree.root(), "a", &[("href", "x.md")]);
        assert_eq!(tree.attr(a, "href"), Some("x.md"));
        assert_eq!(tree.attr(a, "title"), None);
    }
}
