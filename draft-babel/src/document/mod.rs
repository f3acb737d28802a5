//! The editor snapshot: the immutable input of every conversion.
//!
//!     A document is an ordered sequence of raw blocks. Each block carries its type, its text,
//!     a list nesting depth and one style set per character of the text. The editing surface
//!     owns these values; conversions only ever read them.
//!
//!     Text length is counted in Unicode scalar values (`char`s), so `styles` holds exactly
//!     `text.chars().count()` entries. The validating constructors enforce that, which is what
//!     lets the rest of the pipeline be total. List depth is bounded by [`MAX_DEPTH`]; every
//!     nesting level becomes one more level of wrappers in the tree.
//!
//!     See [raw] for the accepted JSON shapes.

pub mod identifiers;
pub mod raw;

pub use identifiers::{BlockType, CharacterStyleSet, InlineStyle, WrapperType};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest list nesting level a block may carry.
pub const MAX_DEPTH: usize = 32;

/// A malformed editor snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("block has {chars} characters but {styles} style sets")]
    StyleLengthMismatch { chars: usize, styles: usize },

    #[error("style range {offset}+{length} ({style}) is outside a block of {text_length} UTF-16 units")]
    StyleRangeOutOfBounds {
        offset: usize,
        length: usize,
        style: InlineStyle,
        text_length: usize,
    },

    #[error("list depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: usize, max: usize },
}

/// One block of the editor snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "raw::RawBlockRepr")]
pub struct RawBlock {
    #[serde(rename = "type")]
    block_type: BlockType,
    text: String,
    depth: usize,
    styles: Vec<CharacterStyleSet>,
}

impl RawBlock {
    /// Build a block from per-character style sets.
    pub fn new(
        block_type: BlockType,
        text: impl Into<String>,
        depth: usize,
        styles: Vec<CharacterStyleSet>,
    ) -> Result<Self, DocumentError> {
        if depth > MAX_DEPTH {
            return Err(DocumentError::DepthTooLarge {
                depth,
                max: MAX_DEPTH,
            });
        }
        let text = text.into();
        let chars = text.chars().count();
        if chars != styles.len() {
            return Err(DocumentError::StyleLengthMismatch {
                chars,
                styles: styles.len(),
            });
        }
        Ok(RawBlock {
            block_type,
            text,
            depth,
            styles,
        })
    }

    /// A block whose characters carry no inline style.
    pub fn plain(block_type: BlockType, text: impl Into<String>) -> Self {
        let text = text.into();
        let styles = vec![CharacterStyleSet::new(); text.chars().count()];
        RawBlock {
            block_type,
            text,
            depth: 0,
            styles,
        }
    }

    /// Build a block from consecutive styled fragments.
    ///
    /// ```ignore
    /// let block = RawBlock::from_runs(BlockType::Unstyled, [
    ///     ("H", CharacterStyleSet::new()),
    ///     ("i", CharacterStyleSet::new().with(InlineStyle::Bold)),
    /// ]);
    /// ```
    pub fn from_runs<'a, I>(block_type: BlockType, runs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, CharacterStyleSet)>,
    {
        let mut text = String::new();
        let mut styles = Vec::new();
        for (fragment, style) in runs {
            text.push_str(fragment);
            styles.extend(std::iter::repeat(style).take(fragment.chars().count()));
        }
        RawBlock {
            block_type,
            text,
            depth: 0,
            styles,
        }
    }

    /// Returns the block at the given list nesting depth, clamped to [`MAX_DEPTH`].
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth.min(MAX_DEPTH);
        self
    }

    pub fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn styles(&self) -> &[CharacterStyleSet] {
        &self.styles
    }
}

/// A complete editor snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub blocks: Vec<RawBlock>,
}

impl RawDocument {
    pub fn new(blocks: Vec<RawBlock>) -> Self {
        RawDocument { blocks }
    }
}

impl FromIterator<RawBlock> for RawDocument {
    fn from_iter<I: IntoIterator<Item = RawBlock>>(iter: I) -> Self {
        RawDocument {
            blocks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_style_length_mismatch() {
        let result = RawBlock::new(
            BlockType::Unstyled,
            "abc",
            0,
            vec![CharacterStyleSet::new()],
        );
        assert_eq!(
            result,
            Err(DocumentError::StyleLengthMismatch {
                chars: 3,
                styles: 1
            })
        );
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let block = RawBlock::new(
            BlockType::Unstyled,
            "héé",
            0,
            vec![CharacterStyleSet::new(); 3],
        );
        assert!(block.is_ok());
    }

    #[test]
    fn test_plain_block_has_one_empty_set_per_char() {
        let block = RawBlock::plain(BlockType::HeaderOne, "Title");
        assert_eq!(block.styles().len(), 5);
        assert!(block.styles().iter().all(CharacterStyleSet::is_empty));
        assert_eq!(block.depth(), 0);
    }

    #[test]
    fn test_from_runs_concatenates_fragments() {
        let bold = CharacterStyleSet::new().with(InlineStyle::Bold);
        let block = RawBlock::from_runs(
            BlockType::Unstyled,
            [("ab", CharacterStyleSet::new()), ("c", bold.clone())],
        )
        .with_depth(2);

        assert_eq!(block.text(), "abc");
        assert_eq!(block.styles()[2], bold);
        assert!(block.styles()[1].is_empty());
        assert_eq!(block.depth(), 2);
    }

    #[test]
    fn test_new_rejects_depth_above_maximum() {
        for depth in [MAX_DEPTH + 1, 1_000_000, usize::MAX] {
            let result = RawBlock::new(BlockType::UnorderedListItem, "", depth, vec![]);
            assert_eq!(
                result,
                Err(DocumentError::DepthTooLarge {
                    depth,
                    max: MAX_DEPTH
                })
            );
        }
    }

    #[test]
    fn test_new_accepts_maximum_depth() {
        let block = RawBlock::new(
            BlockType::UnorderedListItem,
            "a",
            MAX_DEPTH,
            vec![CharacterStyleSet::new()],
        )
        .unwrap();
        assert_eq!(block.depth(), MAX_DEPTH);
    }

    #[test]
    fn test_with_depth_clamps_to_maximum() {
        let block = RawBlock::plain(BlockType::OrderedListItem, "a").with_depth(usize::MAX);
        assert_eq!(block.depth(), MAX_DEPTH);
    }
}
