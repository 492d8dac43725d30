use syntaxviz_core::{TreeWalker, VisualizationNode, serialize, to_json_pretty};
use tree_sitter::{Parser, Tree};

use crate::error::EngineError;
use crate::grammar::Grammar;
use crate::node::TsNode;

/// Parse `source` with a fresh tree-sitter parser for `grammar`.
pub fn parse(source: &str, grammar: Grammar) -> Result<Tree, EngineError> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar.language())
        .map_err(|source| EngineError::Language { grammar, source })?;

    let tree = parser
        .parse(source, None)
        .ok_or(EngineError::NoTree { grammar })?;
    log::debug!(
        "parsed {} bytes with the {grammar} grammar (errors: {})",
        source.len(),
        tree.root_node().has_error()
    );
    Ok(tree)
}

/// Parse `source` and walk the resulting tree.
///
/// The tree-sitter tree is dropped before returning; the visualization tree
/// owns all of its data.
pub fn render(
    source: &str,
    grammar: Grammar,
    walker: &TreeWalker,
) -> Result<VisualizationNode, EngineError> {
    let tree = parse(source, grammar)?;
    let root = TsNode::new(tree.root_node(), source);
    log::debug!("walking with {:?}", walker.options());
    let node = walker.visit(&root)?;
    log::debug!(
        "rendered {} nodes, height {}",
        node.node_count(),
        node.height()
    );
    Ok(node)
}

/// [`render`], then encode as JSON.
pub fn render_json(
    source: &str,
    grammar: Grammar,
    walker: &TreeWalker,
    pretty: bool,
) -> Result<String, EngineError> {
    if pretty {
        let node = render(source, grammar, walker)?;
        return Ok(to_json_pretty(&node)?);
    }
    let tree = parse(source, grammar)?;
    let root = TsNode::new(tree.root_node(), source);
    log::debug!("walking with {:?}", walker.options());
    Ok(serialize(&root, walker)?)
}
