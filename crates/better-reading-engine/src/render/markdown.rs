//! Markdown → [`RenderedTree`] with pulldown-cmark.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use super::tree::{NodeId, RenderedTree};

/// Renders `src` under a `div` root.
///
/// Front matter, raw HTML and images are not rendered. Code blocks become
/// `pre > code`.
pub fn render_markdown(src: &str) -> RenderedTree {
    let options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
        | Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut tree = RenderedTree::new("div");
    let mut stack: Vec<NodeId> = vec![tree.root()];
    // Depth inside tags whose content is dropped.
    let mut skip = 0usize;
    // Header cells arrive directly under `TableHead`, with no row of their own.
    let mut in_table_head = false;

    for event in Parser::new_ext(src, options) {
        if skip > 0 {
            match event {
                Event::Start(Tag::MetadataBlock(_) | Tag::HtmlBlock | Tag::Image { .. }) => {
                    skip += 1
                }
                Event::End(TagEnd::MetadataBlock(_) | TagEnd::HtmlBlock | TagEnd::Image) => {
                    skip -= 1
                }
                _ => {}
            }
            continue;
        }

        let current = stack.last().copied().unwrap_or(tree.root());
        match event {
            Event::Start(Tag::MetadataBlock(_) | Tag::HtmlBlock | Tag::Image { .. }) => skip += 1,
            Event::Start(Tag::CodeBlock(_)) => {
                let pre = tree.append_element(current, "pre", &[]);
                let code = tree.append_element(pre, "code", &[]);
                stack.extend([pre, code]);
            }
            Event::End(TagEnd::CodeBlock) => {
                stack.pop();
                stack.pop();
            }
            Event::Start(Tag::TableHead) => {
                let thead = tree.append_element(current, "thead", &[]);
                let tr = tree.append_element(thead, "tr", &[]);
                stack.extend([thead, tr]);
                in_table_head = true;
            }
            Event::End(TagEnd::TableHead) => {
                stack.pop();
                stack.pop();
                in_table_head = false;
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                let a = tree.append_element(current, "a", &[("href", &*dest_url)]);
                stack.push(a);
            }
            Event::Start(tag) => {
                let name = match tag {
                    Tag::Paragraph => "p".to_owned(),
                    Tag::Heading { level, .. } => format!("h{}", level as usize),
                    Tag::BlockQuote(_) => "blockquote".to_owned(),
                    Tag::List(Some(_)) => "ol".to_owned(),
                    Tag::List(None) => "ul".to_owned(),
                    Tag::Item => "li".to_owned(),
                    Tag::Table(_) => "table".to_owned(),
                    Tag::TableRow => "tr".to_owned(),
                    Tag::TableCell if in_table_head => "th".to_owned(),
                    Tag::TableCell => "td".to_owned(),
                    Tag::Emphasis => "em".to_owned(),
                    Tag::Strong => "strong".to_owned(),
                    Tag::Strikethrough => "del".to_owned(),
                    _ => "div".to_owned(),
                };
                let el = tree.append_element(current, &name, &[]);
                stack.push(el);
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(text) => {
                tree.append_text(current, &text);
            }
            Event::Code(text) | Event::InlineMath(text) | Event::DisplayMath(text) => {
                let code = tree.append_element(current, "code", &[]);
                tree.append_text(code, &text);
            }
            Event::SoftBreak => {
                tree.append_text(current, "\n");
            }
            Event::HardBreak => {
                tree.append_element(current, "br", &[]);
            }
            Event::Rule => {
                tree.append_element(current, "hr", &[]);
            }
            Event::TaskListMarker(checked) => {
                let attrs: &[(&str, &str)] = if checked {
                    &[("type", "checkbox"), ("disabled", ""), ("checked", "")]
                } else {
                    &[("type", "checkbox"), ("disabled", "")]
                };
                tree.append_element(current, "input", attrs);
            }
            Event::FootnoteReference(label) => {
                let sup = tree.append_element(current, "sup", &[]);
                tree.append_text(sup, &label);
            }
            // Raw HTML.
            _ => {}
        }
    }
    tree
}
