//! # Tree Walker
//!
//! A single depth-first, pre-order descent over a [`SourceNode`] tree. Each
//! visited node yields exactly one [`VisualizationNode`]; containers recurse
//! into their children in source order, leaves stop.
//!
//! ```text
//! visit(root)
//!   content  = normalize(root.text())
//!   span     = root.span()
//!   children = root.children()?.map(visit)   // containers only
//! ```
//!
//! The walker trusts the input to be finite and acyclic. For trees from an
//! untrusted parser, set [`WalkLimits`] so a runaway tree fails with
//! [`WalkError::LimitExceeded`] instead of exhausting the stack.

use serde::{Deserialize, Serialize};

use crate::error::{Limit, WalkError};
use crate::node::VisualizationNode;
use crate::normalize::normalize;
use crate::source::SourceNode;
use crate::span::SourceSpan;

/// Optional caps on the size of a walk. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkLimits {
    /// Deepest nesting allowed; the root is at depth 0.
    pub max_depth: Option<usize>,
    /// Most nodes a single walk may produce.
    pub max_nodes: Option<usize>,
}

impl WalkLimits {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WalkOptions {
    pub limits: WalkLimits,
    /// Record each node's kind name in [`VisualizationNode::kind`].
    pub include_kinds: bool,
}

/// Builds [`VisualizationNode`] trees. Holds only its options, so one walker
/// can be shared across threads and reused for any number of trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeWalker {
    options: WalkOptions,
}

/// Per-walk bookkeeping for the node-count limit.
struct WalkState {
    visited: usize,
}

impl TreeWalker {
    pub fn new(options: WalkOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Walk the tree rooted at `root`.
    ///
    /// Returns the complete visualization tree, or the first error hit; no
    /// partial tree is ever returned.
    pub fn visit<N: SourceNode>(&self, root: &N) -> Result<VisualizationNode, WalkError> {
        let mut state = WalkState { visited: 0 };
        self.visit_at(root, 0, &mut state)
    }

    fn visit_at<N: SourceNode>(
        &self,
        node: &N,
        depth: usize,
        state: &mut WalkState,
    ) -> Result<VisualizationNode, WalkError> {
        let span = node.span();
        state.visited += 1;
        self.check_limits(span, depth, state.visited)?;

        let content = normalize(&node.text()?);
        let kind = if self.options.include_kinds {
            node.kind().map(|kind| kind.into_owned())
        } else {
            None
        };

        let children = match node.children() {
            Some(sources) => {
                let mut children = Vec::with_capacity(sources.len());
                for child in &sources {
                    children.push(self.visit_at(child, depth + 1, state)?);
                }
                children
            }
            None => Vec::new(),
        };

        Ok(VisualizationNode {
            content,
            span,
            kind,
            children,
        })
    }

    fn check_limits(&self, at: SourceSpan, depth: usize, visited: usize) -> Result<(), WalkError> {
        let limits = &self.options.limits;
        if let Some(max) = limits.max_depth
            && depth > max
        {
            return Err(WalkError::LimitExceeded {
                limit: Limit::Depth,
                max,
                at,
            });
        }
        if let Some(max) = limits.max_nodes
            && visited > max
        {
            return Err(WalkError::LimitExceeded {
                limit: Limit::Nodes,
                max,
                at,
            });
        }
        Ok(())
    }
}

/// Walk `root` with default options: no limits, no kind names.
pub fn visit<N: SourceNode>(root: &N) -> Result<VisualizationNode, WalkError> {
    TreeWalker::default().visit(root)
}
