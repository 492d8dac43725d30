use std::borrow::Cow;

use crate::error::WalkError;
use crate::span::SourceSpan;

/// Read-only view of one node in an externally built syntax tree.
///
/// This is the only thing the walker knows about the input. Whether a node
/// is a container is answered by [`children`](SourceNode::children): `Some`
/// for containers (possibly empty), `None` for leaf tokens. A leaf's
/// children are never asked for again, whatever substructure the underlying
/// tree might expose.
///
/// Implementations are usually cheap handles (`Copy` or reference-counted),
/// since children are handed back by value.
pub trait SourceNode: Sized {
    /// The node's full rendered text, including all descendant text.
    ///
    /// Fails with [`WalkError::Malformed`] when the text cannot be recovered,
    /// e.g. a span that does not fit the source it claims to come from.
    fn text(&self) -> Result<Cow<'_, str>, WalkError>;

    /// Where the node sits in the parsed source.
    fn span(&self) -> SourceSpan;

    /// Children in source order for containers, `None` for leaves.
    fn children(&self) -> Option<Vec<Self>>;

    /// Parser-specific kind name, if the tree has one.
    fn kind(&self) -> Option<Cow<'_, str>> {
        None
    }
}
