use std::fmt;

use thiserror::Error;

use crate::span::SourceSpan;

/// Which configured cap a walk ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Nesting depth below the root.
    Depth,
    /// Total number of nodes visited.
    Nodes,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Depth => f.write_str("depth"),
            Limit::Nodes => f.write_str("node count"),
        }
    }
}

/// Failures of a single tree walk. Either variant aborts the whole walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("malformed syntax node at {span}: {reason}")]
    Malformed { span: SourceSpan, reason: String },

    #[error("input too large or possibly cyclic: {limit} limit of {max} exceeded at {at}")]
    LimitExceeded {
        limit: Limit,
        max: usize,
        /// Span of the node that tripped the limit.
        at: SourceSpan,
    },
}

/// Errors from walking and encoding in one step.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("failed to encode visualization tree: {0}")]
    Json(#[from] serde_json::Error),
}
