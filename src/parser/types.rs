/// A single mind map node: a label, an optional identifier, and its
/// children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    /// The node's identifier from the source document's own namespace.
    /// Only required on nodes that render as requirements.
    pub raw_id: Option<String>,
    pub children: Vec<NodeChild>,
}

impl Node {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw_id: None,
            children: Vec::new(),
        }
    }

    pub fn with_raw_id(mut self, raw_id: impl Into<String>) -> Self {
        self.raw_id = Some(raw_id.into());
        self
    }

    /// True when the node has no children at all, styling annotations
    /// included. Leaves render as standalone paragraphs.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn structural_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|child| match child {
            NodeChild::Node(node) => Some(node),
            NodeChild::Style(_) => None,
        })
    }
}

/// An immediate child of a node: either a structural sub-node or a styling
/// annotation. Document order across both kinds is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeChild {
    Node(Node),
    Style(StyleAnnotation),
}

/// A formatting marker attached to a node. Used purely as a classification
/// signal (bold -> heading, italic -> requirement), never rendered as
/// visual styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleAnnotation {
    pub bold: bool,
    pub italic: bool,
}
