use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tree_sitter::Language;

/// Grammars the engine can parse with.
///
/// tree-sitter-md splits Markdown in two: the block grammar produces the
/// document structure and leaves paragraph text as opaque `inline` leaves;
/// the inline grammar parses a single run of inline text (emphasis, links,
/// code spans).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    #[default]
    Markdown,
    MarkdownInline,
}

impl Grammar {
    pub const ALL: [Grammar; 2] = [Grammar::Markdown, Grammar::MarkdownInline];

    /// Name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Grammar::Markdown => "markdown",
            Grammar::MarkdownInline => "markdown-inline",
        }
    }

    pub fn language(self) -> Language {
        match self {
            Grammar::Markdown => tree_sitter_md::LANGUAGE.into(),
            Grammar::MarkdownInline => tree_sitter_md::INLINE_LANGUAGE.into(),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grammar `{0}` (expected one of: markdown, markdown-inline)")]
pub struct UnknownGrammar(pub String);

impl FromStr for Grammar {
    type Err = UnknownGrammar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grammar::ALL
            .into_iter()
            .find(|grammar| grammar.name() == s)
            .ok_or_else(|| UnknownGrammar(s.to_string()))
    }
}
