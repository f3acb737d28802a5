//! Collapses per-character style sets into style runs.
//!
//! ```text
//! "1234", [{BOLD}, {BOLD}, {BOLD, ITALIC}, {}]
//!
//! => [("12", {BOLD}), ("3", {BOLD, ITALIC}), ("4", {})]
//! ```
//!
//! Runs are split only where the style set changes by value. Two sets that were built
//! separately but hold the same styles belong to the same run.

use crate::document::CharacterStyleSet;
use crate::ir::nodes::Chunk;

/// Group the characters of `text` into runs of equal style.
///
/// `styles` holds one set per `char` of `text`; [`RawBlock`](crate::document::RawBlock)
/// guarantees that. The concatenated chunk texts always equal `text`, and no two adjacent
/// chunks have equal style sets. Empty text gives no chunks.
pub fn group_by_styles(text: &str, styles: &[CharacterStyleSet]) -> Vec<Chunk> {
    debug_assert_eq!(text.chars().count(), styles.len());

    let mut chunks: Vec<Chunk> = Vec::new();
    for (ch, style) in text.chars().zip(styles) {
        match chunks.last_mut() {
            Some(open) if open.style == *style => open.push(ch),
            _ => chunks.push(Chunk::new(ch.to_string(), style.clone())),
        }
    }
    chunks
}
