//! [`SourceNode`] for rowan trees.
//!
//! Rowan draws the container/leaf line for us: a `SyntaxNode` is a
//! container whose children are the nodes and tokens below it, a
//! `SyntaxToken` is a leaf. Walk a tree by wrapping its root:
//!
//! ```ignore
//! let element = rowan::NodeOrToken::Node(root);
//! let node = syntaxviz_core::visit(&element)?;
//! ```

use std::borrow::Cow;

use rowan::{Language, NodeOrToken, SyntaxElement, TextRange};

use crate::error::WalkError;
use crate::source::SourceNode;
use crate::span::SourceSpan;

impl<L: Language> SourceNode for SyntaxElement<L> {
    fn text(&self) -> Result<Cow<'_, str>, WalkError> {
        Ok(match self {
            NodeOrToken::Node(node) => Cow::Owned(node.text().to_string()),
            NodeOrToken::Token(token) => Cow::Borrowed(token.text()),
        })
    }

    fn span(&self) -> SourceSpan {
        let range = match self {
            NodeOrToken::Node(node) => node.text_range(),
            NodeOrToken::Token(token) => token.text_range(),
        };
        span_of(range)
    }

    fn children(&self) -> Option<Vec<Self>> {
        match self {
            NodeOrToken::Node(node) => Some(node.children_with_tokens().collect()),
            NodeOrToken::Token(_) => None,
        }
    }

    fn kind(&self) -> Option<Cow<'_, str>> {
        let kind = match self {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        };
        Some(Cow::Owned(format!("{kind:?}")))
    }
}

fn span_of(range: TextRange) -> SourceSpan {
    SourceSpan::new(range.start().into(), range.len().into())
}
