//! FreeMind (.mm) parsing: XML events to a [`Node`] tree.

use anyhow::{bail, Context, Result};
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::parser::types::*;

/// Parse a FreeMind document into its root nodes.
///
/// Every top-level `<node>` under the `<map>` element becomes one root;
/// `<font>` children become styling annotations on the enclosing node.
/// Elements this tool does not render (icons, edges, rich content) are
/// skipped.
pub fn parse_document(content: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<Node> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("malformed XML near offset {}", reader.buffer_position()))?;

        match event {
            Event::Start(e) if e.local_name().as_ref() == b"node" => {
                stack.push(node_from_element(&e)?);
            }
            Event::Empty(e) if e.local_name().as_ref() == b"node" => {
                attach(node_from_element(&e)?, &mut stack, &mut roots);
            }
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"font" => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(NodeChild::Style(style_from_element(&e)?));
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"node" => {
                let Some(node) = stack.pop() else {
                    bail!(
                        "unexpected </node> near offset {}",
                        reader.buffer_position()
                    );
                };
                attach(node, &mut stack, &mut roots);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        bail!("unclosed <node> element at end of document");
    }

    Ok(roots)
}

/// A finished node joins its parent's children, or the root list when the
/// stack is empty.
fn attach(node: Node, stack: &mut Vec<Node>, roots: &mut Vec<Node>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(NodeChild::Node(node)),
        None => roots.push(node),
    }
}

fn node_from_element(element: &BytesStart) -> Result<Node> {
    let mut node = Node::new("");

    for attr in element.attributes() {
        let attr = attr.context("bad attribute on <node>")?;
        match attr.key.as_ref() {
            b"TEXT" => {
                node.text = attr
                    .unescape_value()
                    .context("bad TEXT attribute on <node>")?
                    .into_owned();
            }
            b"ID" => {
                node.raw_id = Some(
                    attr.unescape_value()
                        .context("bad ID attribute on <node>")?
                        .into_owned(),
                );
            }
            _ => {}
        }
    }

    Ok(node)
}

fn style_from_element(element: &BytesStart) -> Result<StyleAnnotation> {
    let mut style = StyleAnnotation::default();

    for attr in element.attributes() {
        let attr = attr.context("bad attribute on <font>")?;
        let enabled = attr.value.as_ref() == b"true";
        match attr.key.as_ref() {
            b"BOLD" => style.bold = enabled,
            b"ITALIC" => style.italic = enabled,
            _ => {}
        }
    }

    Ok(style)
}
