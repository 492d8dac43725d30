//! JSON transport for visualization trees.

use crate::error::Error;
use crate::node::VisualizationNode;
use crate::source::SourceNode;
use crate::walker::TreeWalker;

/// Compact JSON, fields in `Content, Start, Length, [Kind,] Children` order.
pub fn to_json(node: &VisualizationNode) -> Result<String, Error> {
    Ok(serde_json::to_string(node)?)
}

/// Indented JSON, for humans and snapshot tests.
pub fn to_json_pretty(node: &VisualizationNode) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Read a tree back from its JSON form.
pub fn from_json(json: &str) -> Result<VisualizationNode, Error> {
    Ok(serde_json::from_str(json)?)
}

/// Walk `root` and encode the result as compact JSON in one step.
pub fn serialize<N: SourceNode>(root: &N, walker: &TreeWalker) -> Result<String, Error> {
    let node = walker.visit(root)?;
    to_json(&node)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::error::{Limit, WalkError};
    use crate::span::SourceSpan;
    use crate::walker::{WalkLimits, WalkOptions};
    use pretty_assertions::assert_eq;

    /// Two-line source: a container over one leaf per line.
    enum Line {
        Doc,
        Text(&'static str, usize),
    }

    impl SourceNode for Line {
        fn text(&self) -> Result<Cow<'_, str>, WalkError> {
            Ok(Cow::Borrowed(match self {
                Line::Doc => "Hello\r\nWorld!",
                Line::Text(text, _) => text,
            }))
        }

        fn span(&self) -> SourceSpan {
            match self {
                Line::Doc => SourceSpan::new(0, 13),
                Line::Text(text, start) => SourceSpan::new(*start, text.len()),
            }
        }

        fn children(&self) -> Option<Vec<Self>> {
            match self {
                Line::Doc => Some(vec![Line::Text("Hello\r\n", 0), Line::Text("World!", 7)]),
                Line::Text(..) => None,
            }
        }
    }

    fn hello_world() -> VisualizationNode {
        VisualizationNode::new("HelloLFWorld!", 0, 13).with_children([
            VisualizationNode::new("HelloLF", 0, 7),
            VisualizationNode::new("World!", 7, 6),
        ])
    }

    #[test]
    fn empty_leaf_compact() {
        let json = to_json(&VisualizationNode::new("", 0, 0)).unwrap();
        assert_eq!(json, r#"{"Content":"","Start":0,"Length":0,"Children":[]}"#);
    }

    #[test]
    fn field_order_is_stable() {
        let json = to_json(&hello_world()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"Content":"HelloLFWorld!","Start":0,"Length":13,"Children":["#,
                r#"{"Content":"HelloLF","Start":0,"Length":7,"Children":[]},"#,
                r#"{"Content":"World!","Start":7,"Length":6,"Children":[]}]}"#,
            )
        );
    }

    #[test]
    fn kind_appears_before_children_only_when_set() {
        let node = VisualizationNode::new("#", 0, 1).with_kind("HASH");
        let json = to_json(&node).unwrap();
        assert_eq!(
            json,
            r##"{"Content":"#","Start":0,"Length":1,"Kind":"HASH","Children":[]}"##
        );
    }

    #[test]
    fn serialize_walks_and_encodes_compactly() {
        let json = serialize(&Line::Doc, &TreeWalker::default()).unwrap();
        assert_eq!(json, to_json(&hello_world()).unwrap());
        assert_eq!(
            json,
            concat!(
                r#"{"Content":"HelloLFWorld!","Start":0,"Length":13,"Children":["#,
                r#"{"Content":"HelloLF","Start":0,"Length":7,"Children":[]},"#,
                r#"{"Content":"World!","Start":7,"Length":6,"Children":[]}]}"#,
            )
        );
    }

    #[test]
    fn serialize_reports_walk_errors() {
        let walker = TreeWalker::new(WalkOptions {
            limits: WalkLimits::default().with_max_nodes(2),
            ..WalkOptions::default()
        });
        let err = serialize(&Line::Doc, &walker).unwrap_err();
        assert!(matches!(
            err,
            Error::Walk(WalkError::LimitExceeded {
                limit: Limit::Nodes,
                max: 2,
                ..
            })
        ));
    }

    #[test]
    fn pretty_output() {
        let json = to_json_pretty(&hello_world()).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "Content": "HelloLFWorld!",
          "Start": 0,
          "Length": 13,
          "Children": [
            {
              "Content": "HelloLF",
              "Start": 0,
              "Length": 7,
              "Children": []
            },
            {
              "Content": "World!",
              "Start": 7,
              "Length": 6,
              "Children": []
            }
          ]
        }
        "#);
    }

    #[test]
    fn reads_back_what_it_writes() {
        let tree = hello_world().with_kind("ROOT");
        let back = from_json(&to_json(&tree).unwrap()).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn missing_children_reads_as_leaf() {
        let node = from_json(r#"{"Content":"x","Start":2,"Length":1}"#).unwrap();
        assert_eq!(node.span, SourceSpan::new(2, 1));
        assert!(node.is_leaf());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = from_json("{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
