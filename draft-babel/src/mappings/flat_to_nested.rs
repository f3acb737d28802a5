//! Folds the flat block sequence into a tree of blocks and list wrappers.
//!
//! # The High-Level Concept
//!
//! The snapshot stores list items as ordinary sibling blocks that carry a depth number. Markup
//! needs the opposite: one `<ul>`/`<ol>` per run of items, and one more, nested inside the
//! previous item, for every level of depth. The algorithm keeps a stack of "open" wrappers,
//! one per nesting level. The item being placed goes into the wrapper for its depth; the
//! stack grows or shrinks to reach that depth first.
//!
//! # The Algorithm
//!
//! 1. **Initialization:**
//!    - Create an empty `Document`
//!    - Create an empty stack of open wrappers (index = nesting level)
//!
//! 2. **Non-list blocks:**
//!    - Close every open level
//!    - Append the block to the document
//!
//! 3. **List items at depth `d`:**
//!    - Close levels deeper than `d`
//!    - If level `d` is open with a different wrapper type, close it (switching list kind
//!      breaks the run)
//!    - Open levels until level `d` exists, each with the item's wrapper type
//!    - Append the item to level `d`
//!
//! 4. **Closing a level:**
//!    - Pop it off the stack
//!    - Append it as the last child of the level below, or to the document at level 0
//!
//! 5. **Completion:**
//!    - Close every open level
//!    - Return the document
//!
//! Appending into a nested level is a push onto the top of the stack, so no update to a
//! nested wrapper can be lost. A level is only attached to its parent once it is closed,
//! and nothing can be appended to the parent while it is open, so child order is preserved.
//!
//! Depth jumps of more than one open every level in between; an item at depth `d` always sits
//! in a wrapper `d` levels below the top-level one. The same holds when a list starts at a
//! depth above zero. Depths beyond [`MAX_DEPTH`] are placed at [`MAX_DEPTH`].

use crate::document::{WrapperType, MAX_DEPTH};
use crate::ir::nodes::{Block, Document, Node, WrapperBlock};
use crate::tags::TagRegistry;

/// Build the IR tree from transformed blocks and their list depths.
///
/// Whether a block is a list item, and which wrapper groups it, comes from `registry`.
/// Blocks whose type the registry does not know are treated as non-list blocks; rendering
/// reports them.
pub fn blocks_to_tree<I>(blocks: I, registry: &TagRegistry) -> Document
where
    I: IntoIterator<Item = (Block, usize)>,
{
    let mut assembler = Assembler::new(registry);
    for (block, depth) in blocks {
        assembler.push(block, depth);
    }
    assembler.finish()
}

struct Assembler<'r> {
    registry: &'r TagRegistry,
    document: Document,
    stack: Vec<WrapperBlock>,
}

impl<'r> Assembler<'r> {
    fn new(registry: &'r TagRegistry) -> Self {
        Assembler {
            registry,
            document: Document::default(),
            stack: Vec::new(),
        }
    }

    fn push(&mut self, block: Block, depth: usize) {
        match self.registry.wrapper_type_for(&block.block_type) {
            Some(wrapper_type) => {
                let wrapper_type = wrapper_type.clone();
                self.level_for(depth, wrapper_type)
                    .children
                    .push(Node::Block(block));
            }
            None => {
                self.close_all();
                self.document.children.push(Node::Block(block));
            }
        }
    }

    /// The open wrapper at `depth`, after closing deeper levels and opening missing ones.
    fn level_for(&mut self, depth: usize, wrapper_type: WrapperType) -> &mut WrapperBlock {
        let depth = depth.min(MAX_DEPTH);
        let levels = depth.saturating_add(1);
        while self.stack.len() > levels {
            self.close_level();
        }

        if self.stack.len() == levels && self.stack[depth].wrapper_type != wrapper_type {
            self.close_level();
        }

        while self.stack.len() < levels {
            tracing::trace!(level = self.stack.len(), %wrapper_type, "opening wrapper");
            self.stack.push(WrapperBlock::new(wrapper_type.clone()));
        }

        &mut self.stack[depth]
    }

    fn close_level(&mut self) {
        if let Some(wrapper) = self.stack.pop() {
            tracing::trace!(
                level = self.stack.len(),
                wrapper_type = %wrapper.wrapper_type,
                children = wrapper.children.len(),
                "closing wrapper"
            );
            let node = Node::Wrapper(wrapper);
            match self.stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.document.children.push(node),
            }
        }
    }

    fn close_all(&mut self) {
        while !self.stack.is_empty() {
            self.close_level();
        }
    }

    fn finish(mut self) -> Document {
        self.close_all();
        tracing::debug!(
            top_level_nodes = self.document.children.len(),
            "assembled document tree"
        );
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockType, CharacterStyleSet};
    use crate::ir::nodes::Chunk;

    fn block(block_type: BlockType, text: &str) -> Block {
        Block::new(block_type, vec![Chunk::new(text, CharacterStyleSet::new())])
    }

    fn ul(text: &str, depth: usize) -> (Block, usize) {
        (block(BlockType::UnorderedListItem, text), depth)
    }

    fn ol(text: &str, depth: usize) -> (Block, usize) {
        (block(BlockType::OrderedListItem, text), depth)
    }

    fn para(text: &str) -> (Block, usize) {
        (block(BlockType::Unstyled, text), 0)
    }

    fn build(blocks: Vec<(Block, usize)>) -> Document {
        blocks_to_tree(blocks, TagRegistry::standard())
    }

    /// Texts of the direct block children of a wrapper, `[..]` marking a nested wrapper.
    fn outline(wrapper: &WrapperBlock) -> String {
        wrapper
            .children
            .iter()
            .map(|child| match child {
                Node::Block(b) => b.text(),
                Node::Wrapper(w) => format!("[{}]", outline(w)),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_empty_input_gives_empty_document() {
        assert_eq!(build(vec![]), Document::default());
    }

    #[test]
    fn test_non_list_blocks_stay_top_level() {
        let doc = build(vec![para("a"), para("b")]);
        assert_eq!(doc.children.len(), 2);
        assert!(doc.children.iter().all(|n| n.as_block().is_some()));
    }

    #[test]
    fn test_consecutive_items_share_a_wrapper() {
        let doc = build(vec![ul("a", 0), ul("b", 0), ul("c", 0)]);
        assert_eq!(doc.children.len(), 1);
        let wrapper = doc.children[0].as_wrapper().unwrap();
        assert_eq!(wrapper.wrapper_type, WrapperType::UnorderedList);
        assert_eq!(outline(wrapper), "a b c");
    }

    #[test]
    fn test_nesting_depths_0_1_1_0() {
        let doc = build(vec![ul("A", 0), ul("B", 1), ul("C", 1), ul("D", 0)]);
        assert_eq!(doc.children.len(), 1);
        assert_eq!(outline(doc.children[0].as_wrapper().unwrap()), "A [B C] D");
    }

    #[test]
    fn test_appending_into_open_nested_wrapper_keeps_every_item() {
        let doc = build(vec![
            ul("a", 0),
            ul("b", 1),
            ul("c", 2),
            ul("d", 2),
            ul("e", 1),
            ul("f", 2),
            ul("g", 0),
        ]);
        assert_eq!(
            outline(doc.children[0].as_wrapper().unwrap()),
            "a [b [c d] e [f]] g"
        );
    }

    #[test]
    fn test_paragraph_closes_list_context() {
        let doc = build(vec![ul("a", 0), ul("b", 1), para("p"), ul("c", 0)]);
        assert_eq!(doc.children.len(), 3);
        assert_eq!(outline(doc.children[0].as_wrapper().unwrap()), "a [b]");
        assert_eq!(doc.children[1].as_block().unwrap().text(), "p");
        assert_eq!(outline(doc.children[2].as_wrapper().unwrap()), "c");
    }

    #[test]
    fn test_switching_list_kind_opens_new_wrapper() {
        let doc = build(vec![ul("a", 0), ol("b", 0), ol("c", 0)]);
        assert_eq!(doc.children.len(), 2);

        let first = doc.children[0].as_wrapper().unwrap();
        let second = doc.children[1].as_wrapper().unwrap();
        assert_eq!(first.wrapper_type, WrapperType::UnorderedList);
        assert_eq!(second.wrapper_type, WrapperType::OrderedList);
        assert_eq!(outline(second), "b c");
    }

    #[test]
    fn test_switching_kind_at_nested_level() {
        let doc = build(vec![ul("a", 0), ul("b", 1), ol("c", 1), ul("d", 0)]);
        let top = doc.children[0].as_wrapper().unwrap();
        assert_eq!(outline(top), "a [b] [c] d");

        let nested: Vec<_> = top
            .children
            .iter()
            .filter_map(Node::as_wrapper)
            .map(|w| w.wrapper_type.clone())
            .collect();
        assert_eq!(
            nested,
            vec![WrapperType::UnorderedList, WrapperType::OrderedList]
        );
    }

    #[test]
    fn test_nested_list_of_other_kind_stays_inside_parent() {
        let doc = build(vec![ul("a", 0), ol("b", 1), ul("c", 0)]);
        assert_eq!(doc.children.len(), 1);
        assert_eq!(outline(doc.children[0].as_wrapper().unwrap()), "a [b] c");
    }

    #[test]
    fn test_depth_jump_opens_intermediate_levels() {
        let doc = build(vec![ul("a", 0), ul("b", 2), ul("c", 2)]);
        let top = doc.children[0].as_wrapper().unwrap();
        assert_eq!(outline(top), "a [[b c]]");
        assert_eq!(top.depth(), 2);
    }

    #[test]
    fn test_list_starting_deep_is_fully_nested() {
        let doc = build(vec![ul("a", 1), ul("b", 0)]);
        assert_eq!(outline(doc.children[0].as_wrapper().unwrap()), "[a] b");
    }

    #[test]
    fn test_depth_beyond_maximum_is_clamped() {
        let doc = build(vec![ul("a", usize::MAX), ul("b", MAX_DEPTH)]);
        let top = doc.children[0].as_wrapper().unwrap();
        assert_eq!(top.depth(), MAX_DEPTH);
        let nested = format!("{}a b{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert_eq!(outline(top), nested);
    }

    #[test]
    fn test_unknown_block_types_are_not_list_items() {
        let doc = build(vec![
            ul("a", 0),
            (block(BlockType::Other("code-block".into()), "x"), 0),
            ul("b", 0),
        ]);
        assert_eq!(doc.children.len(), 3);
    }
}
