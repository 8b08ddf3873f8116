use anyhow::{Context, Result};

use crate::parser::types::*;
use crate::renderer::traits::HeadingFormat;
use crate::store::IdentifierStore;

/// The markup role a node plays in the output, decided once per node
/// before any of its text is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Heading,
    Requirement,
    Plain,
}

/// Classify a node by its styling annotations, in document order.
///
/// The first annotation carrying a relevant flag decides the role; bold is
/// checked before italic within a single annotation, so an annotation
/// flagged both ways makes a heading. A node with no flagged annotation is
/// plain.
pub fn classify(node: &Node) -> NodeRole {
    for child in &node.children {
        if let NodeChild::Style(style) = child {
            if style.bold {
                return NodeRole::Heading;
            }
            if style.italic {
                return NodeRole::Requirement;
            }
        }
    }
    NodeRole::Plain
}

/// Walks a node tree and produces one rendered document string.
///
/// One exporter performs one format pass. The identifier store is borrowed
/// rather than owned so that every pass in a run shares the same store:
/// a requirement number resolved for one format is immediately visible to
/// the next, which keeps numbering identical across all outputs of a run.
pub struct Exporter<'a> {
    format: &'a dyn HeadingFormat,
    store: &'a mut IdentifierStore,
}

impl<'a> Exporter<'a> {
    pub fn new(format: &'a dyn HeadingFormat, store: &'a mut IdentifierStore) -> Self {
        Self { format, store }
    }

    /// Render one root node and all of its descendants.
    pub fn export(&mut self, root: &Node) -> Result<String> {
        self.render(root, 0)
    }

    fn render(&mut self, node: &Node, depth: usize) -> Result<String> {
        // A childless node is a standalone paragraph.
        if node.is_leaf() {
            return Ok(format!("{}\n\n", node.text));
        }

        let mut output = String::new();

        match classify(node) {
            NodeRole::Heading => {
                output.push_str(&self.format.format_heading(&node.text, depth));
            }
            NodeRole::Requirement => {
                let raw_id = node.raw_id.as_deref().with_context(|| {
                    format!("requirement node {:?} has no identifier", node.text)
                })?;
                let id = self.store.resolve(raw_id)?;
                // Requirement lines are identical in every output format.
                output.push_str(&format!("Requirement {}: {}\n\n", id, node.text));
            }
            NodeRole::Plain => {
                // Container fallback: an unstyled node with sub-nodes still
                // introduces them with its own text. A node holding only
                // unflagged annotations emits nothing.
                if node.structural_children().next().is_some() {
                    output.push_str(&node.text);
                    output.push_str("\n\n");
                }
            }
        }

        for child in node.structural_children() {
            output.push_str(&self.render(child, depth + 1)?);
        }

        Ok(output)
    }
}
