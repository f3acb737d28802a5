//! Contains logic for mapping between the editor snapshot and the IR.

pub mod flat_to_nested;
pub mod style_runs;
pub mod transform;
