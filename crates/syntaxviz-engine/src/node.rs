use std::borrow::Cow;

use syntaxviz_core::{SourceNode, SourceSpan, WalkError};
use tree_sitter::Node;

/// A tree-sitter node paired with the source text it was parsed from.
///
/// tree-sitter nodes only carry byte offsets, so the source is needed to
/// recover their text. Nodes with at least one child (named or anonymous)
/// are containers; childless nodes are leaves.
#[derive(Debug, Clone, Copy)]
pub struct TsNode<'tree, 'src> {
    node: Node<'tree>,
    source: &'src str,
}

impl<'tree, 'src> TsNode<'tree, 'src> {
    pub fn new(node: Node<'tree>, source: &'src str) -> Self {
        Self { node, source }
    }

    pub fn node(&self) -> Node<'tree> {
        self.node
    }
}

impl SourceNode for TsNode<'_, '_> {
    fn text(&self) -> Result<Cow<'_, str>, WalkError> {
        let range = self.node.byte_range();
        match self.source.get(range.clone()) {
            Some(text) => Ok(Cow::Borrowed(text)),
            None => Err(WalkError::Malformed {
                span: range.into(),
                reason: format!(
                    "{} node does not fit a {}-byte source on character boundaries",
                    self.node.kind(),
                    self.source.len()
                ),
            }),
        }
    }

    fn span(&self) -> SourceSpan {
        self.node.byte_range().into()
    }

    fn children(&self) -> Option<Vec<Self>> {
        if self.node.child_count() == 0 {
            return None;
        }
        let mut cursor = self.node.walk();
        let children = self
            .node
            .children(&mut cursor)
            .map(|node| Self::new(node, self.source))
            .collect();
        Some(children)
    }

    fn kind(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.node.kind()))
    }
}
