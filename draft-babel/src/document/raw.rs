//! JSON shapes accepted for a snapshot block.
//!
//! Two shapes are understood:
//!
//! ```text
//! per character:  { "type": "unstyled", "text": "Hi", "depth": 0, "styles": [[], ["BOLD"]] }
//! style ranges:   { "key": "a1", "type": "unstyled", "text": "Hi", "depth": 0,
//!                   "inlineStyleRanges": [{ "offset": 1, "length": 1, "style": "BOLD" }],
//!                   "entityRanges": [], "data": {} }
//! ```
//!
//! The second is what the editor's raw export produces. Its offsets and lengths count UTF-16
//! code units, so ranges are mapped back onto `char`s here. Serialization always writes the
//! per-character shape.
//!
//! Every block must carry either `styles` or `inlineStyleRanges`. A block whose `styles` does
//! not deserialize is rejected rather than read as a block without style ranges.

use super::{BlockType, CharacterStyleSet, DocumentError, InlineStyle, RawBlock};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawBlockRepr {
    PerCharacter(PerCharacterBlock),
    Ranged(RangedBlock),
}

#[derive(Debug, Deserialize)]
pub struct PerCharacterBlock {
    #[serde(rename = "type")]
    block_type: BlockType,
    text: String,
    #[serde(default)]
    depth: usize,
    styles: Vec<CharacterStyleSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangedBlock {
    #[serde(rename = "type")]
    block_type: BlockType,
    text: String,
    #[serde(default)]
    depth: usize,
    inline_style_ranges: Vec<StyleRange>,
}

/// A style applied to `length` UTF-16 units starting at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

impl TryFrom<RawBlockRepr> for RawBlock {
    type Error = DocumentError;

    fn try_from(repr: RawBlockRepr) -> Result<Self, Self::Error> {
        match repr {
            RawBlockRepr::PerCharacter(block) => {
                RawBlock::new(block.block_type, block.text, block.depth, block.styles)
            }
            RawBlockRepr::Ranged(block) => {
                let styles = expand_style_ranges(&block.text, &block.inline_style_ranges)?;
                RawBlock::new(block.block_type, block.text, block.depth, styles)
            }
        }
    }
}

/// Expand UTF-16 style ranges into one style set per `char` of `text`.
///
/// A character takes a range's style when the range covers the first UTF-16 unit of the
/// character.
pub fn expand_style_ranges(
    text: &str,
    ranges: &[StyleRange],
) -> Result<Vec<CharacterStyleSet>, DocumentError> {
    let text_length: usize = text.chars().map(char::len_utf16).sum();
    for range in ranges {
        if range.offset.saturating_add(range.length) > text_length {
            return Err(DocumentError::StyleRangeOutOfBounds {
                offset: range.offset,
                length: range.length,
                style: range.style.clone(),
                text_length,
            });
        }
    }

    let mut styles = Vec::with_capacity(text.chars().count());
    let mut unit = 0;
    for ch in text.chars() {
        let set = ranges
            .iter()
            .filter(|range| range.offset <= unit && unit < range.offset + range.length)
            .map(|range| range.style.clone())
            .collect();
        styles.push(set);
        unit += ch.len_utf16();
    }
    Ok(styles)
}
