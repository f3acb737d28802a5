//! Converts snapshot blocks into IR blocks.

use super::style_runs::group_by_styles;
use crate::document::RawBlock;
use crate::ir::nodes::Block;

/// Transform one snapshot block into an IR block. Pure and total.
pub fn transform_block(raw: &RawBlock) -> Block {
    Block::new(
        raw.block_type().clone(),
        group_by_styles(raw.text(), raw.styles()),
    )
}

/// Transform every block, keeping each one's list depth alongside it for the wrapper pass.
pub fn transform_blocks(raw_blocks: &[RawBlock]) -> Vec<(Block, usize)> {
    raw_blocks
        .iter()
        .map(|raw| (transform_block(raw), raw.depth()))
        .collect()
}
