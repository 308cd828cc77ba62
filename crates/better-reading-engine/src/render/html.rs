//! HTML serialization of a [`RenderedTree`].

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::tree::{NodeId, NodeKind, RenderedTree};

const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

impl RenderedTree {
    /// `id` and its subtree as HTML.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// The children of `id` as HTML, without `id`'s own tags.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_node(child, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(text) => out.push_str(&encode_text(text)),
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }
                for &child in self.children(id) {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn escapes_text_and_attributes() {
        let mut tree = RenderedTree::new("p");
        let root = tree.root();
        tree.append_text(root, "a < b & c");
        let a = tree.append_element(root, "a", &[("href", "x\"y")]);
        tree.append_text(a, "link");
        assert_snapshot!(tree.to_html(root), @r#"<p>a &lt; b &amp; c<a href="x&quot;y">link</a></p>"#);
    }

    #[test]
    fn void_elements_have_no_close_tag() {
        let mut tree = RenderedTree::new("p");
        let root = tree.root();
        tree.append_text(root, "one");
        tree.append_element(root, "br", &[]);
        tree.append_text(root, "two");
        assert_snapshot!(tree.inner_html(root), @"one<br>two");
    }
}
