use thiserror::Error;
use tree_sitter::LanguageError;

use crate::grammar::Grammar;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load the {grammar} grammar: {source}")]
    Language {
        grammar: Grammar,
        source: LanguageError,
    },

    #[error("the {grammar} parser produced no syntax tree")]
    NoTree { grammar: Grammar },

    #[error(transparent)]
    Render(#[from] syntaxviz_core::Error),
}

impl From<syntaxviz_core::WalkError> for EngineError {
    fn from(err: syntaxviz_core::WalkError) -> Self {
        Self::Render(err.into())
    }
}
