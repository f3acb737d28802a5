//! Intermediate Representation (IR) of a snapshot about to become markup.
//!
//! # Design Philosophy
//!
//! The editor snapshot is flat and per-character: every character has its own style set and
//! list items are sibling blocks that only differ by a depth number. Markup is neither, so
//! the IR sits between the two:
//!
//! - **Runs, not characters**: a [`nodes::Block`] holds [`nodes::Chunk`]s, maximal runs of
//!   characters sharing one style set
//! - **Explicit nesting**: list items are grouped under [`nodes::WrapperBlock`]s, one per
//!   level of list nesting
//! - **Write once**: a [`nodes::Document`] is built once per conversion and then only read
//!
//! # Modules
//!
//! - [`nodes`]: Core IR data structures
//!
//! The conversions into the IR live in [`crate::mappings`].

pub mod nodes;
