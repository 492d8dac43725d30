//! # syntaxviz-engine
//!
//! Connects a real parser to [`syntaxviz_core`]. Source text is parsed with
//! tree-sitter using one of the [`Grammar`]s, each tree-sitter node is exposed
//! to the walker through [`TsNode`], and the result is a
//! [`VisualizationNode`] tree or its JSON form.
//!
//! ```text
//! &str ──parse(grammar)──► tree_sitter::Tree ──TsNode──► TreeWalker ──► VisualizationNode / JSON
//! ```
//!
//! ```
//! use syntaxviz_engine::{Grammar, TreeWalker, render};
//!
//! let node = render("# Title\n", Grammar::Markdown, &TreeWalker::default()).unwrap();
//! assert!(node.content.contains("# Title"));
//! ```

mod error;
mod grammar;
mod node;
mod render;

pub use error::EngineError;
pub use grammar::{Grammar, UnknownGrammar};
pub use node::TsNode;
pub use render::{parse, render, render_json};

pub use syntaxviz_core::{
    SourceSpan, TreeWalker, VisualizationNode, WalkError, WalkLimits, WalkOptions,
};
