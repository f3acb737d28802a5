//! Core IR data structures.
//!
//! All nodes are plain owned values, built once per conversion and only read afterwards.

use crate::document::{BlockType, CharacterStyleSet, WrapperType};

/// A maximal run of characters sharing one style set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub style: CharacterStyleSet,
}

impl Chunk {
    pub fn new(text: impl Into<String>, style: CharacterStyleSet) -> Self {
        Chunk {
            text: text.into(),
            style,
        }
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }
}

/// A paragraph-level unit: its type and its style runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub block_type: BlockType,
    pub chunks: Vec<Chunk>,
}

impl Block {
    pub fn new(block_type: BlockType, chunks: Vec<Chunk>) -> Self {
        Block { block_type, chunks }
    }

    /// The block's text, chunk boundaries removed.
    pub fn text(&self) -> String {
        self.chunks.iter().map(|chunk| chunk.text.as_str()).collect()
    }
}

/// One level of list nesting.
///
/// A `Wrapper` child is one level deeper and belongs to the nearest `Block` before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperBlock {
    pub wrapper_type: WrapperType,
    pub children: Vec<Node>,
}

impl WrapperBlock {
    pub fn new(wrapper_type: WrapperType) -> Self {
        WrapperBlock {
            wrapper_type,
            children: vec![],
        }
    }

    /// Length of the chain of wrappers reached by repeatedly taking the last child while it
    /// is itself a wrapper.
    pub fn depth(&self) -> usize {
        match self.children.last() {
            Some(Node::Wrapper(nested)) => 1 + nested.depth(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Block(Block),
    Wrapper(WrapperBlock),
}

impl Node {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Node::Block(block) => Some(block),
            Node::Wrapper(_) => None,
        }
    }

    pub fn as_wrapper(&self) -> Option<&WrapperBlock> {
        match self {
            Node::Wrapper(wrapper) => Some(wrapper),
            Node::Block(_) => None,
        }
    }
}

/// The assembled tree: top-level blocks and wrappers in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}
