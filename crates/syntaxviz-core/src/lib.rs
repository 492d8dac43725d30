//! # syntaxviz-core
//!
//! Converts a syntax tree built by some external parser into a plain,
//! serializable tree of [`VisualizationNode`]s that a tree-view UI can render.
//!
//! ## What goes in, what comes out
//!
//! The input is any tree whose nodes implement [`SourceNode`]: each node can
//! report its own rendered text, its `(start, length)` span in the parsed
//! source, and, if it is a container, its children in source order.
//!
//! The output mirrors that tree one node for one node:
//!
//! ```text
//! container "Hello\r\nWorld!" @0+13        { Content: "HelloLFWorld!", Start: 0, Length: 13,
//! ├── leaf "Hello\r\n"        @0+7    →      Children: [ { Content: "HelloLF", Start: 0, Length: 7, Children: [] },
//! └── leaf "World!"           @7+6                       { Content: "World!",  Start: 7, Length: 6, Children: [] } ] }
//! ```
//!
//! Every node's text goes through [`normalize`], which turns both `\r\n` and
//! `\n` into the visible marker `LF`. The result is byte-for-byte identical no
//! matter how the source file was line-terminated.
//!
//! ## Module Structure
//!
//! ```text
//! syntaxviz-core/
//! ├── lib.rs        # This file - public API
//! ├── normalize.rs  # Line-ending normalization
//! ├── span.rs       # SourceSpan (offset + length)
//! ├── node.rs       # VisualizationNode, the serializable output
//! ├── source.rs     # SourceNode, the capability trait over input trees
//! ├── walker.rs     # TreeWalker, WalkOptions, WalkLimits
//! ├── json.rs       # JSON transport helpers
//! ├── rowan_tree.rs # SourceNode for rowan syntax elements
//! └── error.rs      # WalkError and Error
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use rowan::{GreenNodeBuilder, NodeOrToken, SyntaxKind};
//! use syntaxviz_core::visit;
//!
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! # enum Lang {}
//! # impl rowan::Language for Lang {
//! #     type Kind = SyntaxKind;
//! #     fn kind_from_raw(raw: SyntaxKind) -> SyntaxKind { raw }
//! #     fn kind_to_raw(kind: SyntaxKind) -> SyntaxKind { kind }
//! # }
//! let mut builder = GreenNodeBuilder::new();
//! builder.start_node(SyntaxKind(1));
//! builder.token(SyntaxKind(0), "a\r\n");
//! builder.token(SyntaxKind(0), "b");
//! builder.finish_node();
//! let root = rowan::SyntaxNode::<Lang>::new_root(builder.finish());
//!
//! let node = visit(&NodeOrToken::Node(root)).unwrap();
//! assert_eq!(node.content, "aLFb");
//! assert_eq!(node.children.len(), 2);
//! ```
//!
//! ## Guarantees
//!
//! - The walk is read-only and synchronous; it performs no I/O and no logging.
//! - Output never borrows from the input tree, so the source tree can be
//!   dropped as soon as [`visit`] returns.
//! - Either a complete tree is returned or the walk fails; there are no
//!   partial results.

mod error;
mod json;
mod node;
mod normalize;
mod rowan_tree;
mod source;
mod span;
mod walker;

pub use error::{Error, Limit, WalkError};
pub use json::{from_json, serialize, to_json, to_json_pretty};
pub use node::{Iter, VisualizationNode};
pub use normalize::{LINE_FEED_MARKER, normalize};
pub use source::SourceNode;
pub use span::SourceSpan;
pub use walker::{TreeWalker, WalkLimits, WalkOptions, visit};
