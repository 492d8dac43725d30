use serde::{Deserialize, Serialize};

use crate::span::SourceSpan;

/// The serializable copy of one syntax-tree node.
///
/// Serializes as
///
/// ```json
/// { "Content": "...", "Start": 0, "Length": 0, "Children": [] }
/// ```
///
/// with `"Kind"` inserted before `"Children"` only when the walk recorded one.
/// A node owns its children outright and keeps no link to its parent or to
/// the tree it was copied from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisualizationNode {
    /// Normalized text of everything the node spans, descendants included.
    pub content: String,
    #[serde(flatten)]
    pub span: SourceSpan,
    /// Parser-specific kind name, present only when the walk asked for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Structural children in source order. Always empty for leaves.
    #[serde(default)]
    pub children: Vec<VisualizationNode>,
}

impl VisualizationNode {
    /// Create a childless node. `content` is stored as given, not normalized.
    pub fn new(content: impl Into<String>, start: usize, length: usize) -> Self {
        Self {
            content: content.into(),
            span: SourceSpan::new(start, length),
            kind: None,
            children: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = VisualizationNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of edges on the longest path down to a leaf. A leaf has height 0.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order iterator over this subtree, starting with `self`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

impl<'a> IntoIterator for &'a VisualizationNode {
    type Item = &'a VisualizationNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order traversal returned by [`VisualizationNode::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a VisualizationNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a VisualizationNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
