//! Tree Visualization of the assembled IR
//!
//! Shows how blocks were grouped into wrappers and how their text was split into style runs,
//! one line per node.
//!
//! ## Example
//!
//! ```text
//! ⧉ Document (2 nodes)
//! ├─ ¶ unstyled
//! │ ├─ ◦ "H" {}
//! │ └─ ◦ "i" {BOLD}
//! └─ ☰ unordered-list
//!   ├─ • unordered-list-item
//!   │ └─ ◦ "A" {}
//!   └─ ☰ unordered-list
//!     └─ • unordered-list-item
//!       └─ ◦ "B" {}
//! ```

use crate::document::{BlockType, RawDocument};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Document, Node};
use crate::tags::TagRegistry;
use std::sync::Arc;

fn block_icon(block_type: &BlockType) -> &'static str {
    match block_type {
        BlockType::HeaderOne
        | BlockType::HeaderTwo
        | BlockType::HeaderThree
        | BlockType::HeaderFour
        | BlockType::HeaderFive
        | BlockType::HeaderSix => "§",
        BlockType::Blockquote => "❝",
        BlockType::UnorderedListItem | BlockType::OrderedListItem => "•",
        BlockType::Unstyled => "¶",
        BlockType::Other(_) => "?",
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    match node {
        Node::Block(block) => {
            output.push_str(&format!(
                "{}{} {} {}\n",
                prefix,
                connector,
                block_icon(&block.block_type),
                block.block_type
            ));
            let count = block.chunks.len();
            for (i, chunk) in block.chunks.iter().enumerate() {
                let chunk_connector = if i == count - 1 { "└─" } else { "├─" };
                output.push_str(&format!(
                    "{}{} ◦ {:?} {}\n",
                    child_prefix, chunk_connector, chunk.text, chunk.style
                ));
            }
        }
        Node::Wrapper(wrapper) => {
            output.push_str(&format!(
                "{}{} ☰ {}\n",
                prefix, connector, wrapper.wrapper_type
            ));
            let count = wrapper.children.len();
            for (i, child) in wrapper.children.iter().enumerate() {
                format_node(child, &child_prefix, i == count - 1, output);
            }
        }
    }
}

/// Render an IR document as an indented tree.
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("⧉ Document ({} nodes)\n", doc.children.len());
    let count = doc.children.len();
    for (i, node) in doc.children.iter().enumerate() {
        format_node(node, "", i == count - 1, &mut output);
    }
    output
}

/// Tree view of the IR built for a snapshot.
pub struct TreevizFormat {
    registry: Arc<TagRegistry>,
}

impl TreevizFormat {
    pub fn new(registry: TagRegistry) -> Self {
        TreevizFormat {
            registry: Arc::new(registry),
        }
    }
}

impl Default for TreevizFormat {
    fn default() -> Self {
        TreevizFormat::new(TagRegistry::default())
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Tree of blocks, list wrappers and style runs"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        Ok(to_treeviz_str(&crate::to_ir(doc, &self.registry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CharacterStyleSet, InlineStyle, RawBlock};

    #[test]
    fn test_treeviz_shows_nesting_and_runs() {
        let doc = RawDocument::new(vec![
            RawBlock::from_runs(
                BlockType::Unstyled,
                [
                    ("H", CharacterStyleSet::new()),
                    ("i", CharacterStyleSet::new().with(InlineStyle::Bold)),
                ],
            ),
            RawBlock::plain(BlockType::UnorderedListItem, "A"),
            RawBlock::plain(BlockType::UnorderedListItem, "B").with_depth(1),
        ]);

        let output = TreevizFormat::default().serialize(&doc).unwrap();
        let expected = "\
⧉ Document (2 nodes)
├─ ¶ unstyled
│ ├─ ◦ \"H\" {}
│ └─ ◦ \"i\" {BOLD}
└─ ☰ unordered-list
  ├─ • unordered-list-item
  │ └─ ◦ \"A\" {}
  └─ ☰ unordered-list
    └─ • unordered-list-item
      └─ ◦ \"B\" {}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_treeviz_of_empty_document() {
        let output = TreevizFormat::default()
            .serialize(&RawDocument::default())
            .unwrap();
        assert_eq!(output, "⧉ Document (0 nodes)\n");
    }
}
