//! Rich-text snapshot to HTML conversion
//!
//!     This crate turns an editor snapshot (a sequence of typed blocks whose characters each
//!     carry a set of inline styles, list items carrying a nesting depth) into an HTML
//!     fragment.
//!
//!     This is a pure lib: it does not read files, environment variables or terminals. The
//!     shell around it lives in draft-cli, configuration loading in draft-config.
//!
//! Architecture
//!
//!     snapshot ──transform──▶ flat IR blocks ──flat_to_nested──▶ IR tree ──html──▶ string
//!
//!     - document: the snapshot types and their JSON shapes
//!     - tags: the tag registry, validated once at startup
//!     - mappings/style_runs: per-character styles → style runs (chunks)
//!     - mappings/transform: snapshot block → IR block
//!     - mappings/flat_to_nested: IR blocks + depths → blocks grouped under list wrappers
//!     - formats/html: IR tree → markup, through the tag registry
//!
//!     Around the pipeline sit a Format trait and a FormatRegistry, the same uniform surface
//!     for every output (html, a json snapshot dump, a tree view of the IR).
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── document                # snapshot model
//!     ├── tags                    # tag registry
//!     ├── ir                      # blocks, chunks, wrappers
//!     ├── mappings                # snapshot → IR
//!     ├── formats
//!     │   ├── html
//!     │   ├── json
//!     │   └── treeviz
//!     ├── lib.rs
//!
//! Concurrency
//!
//!     Every call builds its own intermediate values and reads the snapshot and registry
//!     only, so calls on different snapshots never need coordination. The built-in registry
//!     is a process-wide read-only value.
//!
//! Testing
//!     tests
//!     ├── html_export.rs          # full documents, inline snapshots
//!     ├── list_nesting.rs         # depth/kind case tables
//!     └── properties.rs           # proptest invariants

pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod mappings;
pub mod registry;
pub mod tags;

pub use document::{BlockType, CharacterStyleSet, InlineStyle, RawBlock, RawDocument, WrapperType};
pub use error::{FormatError, RenderError};
pub use format::Format;
pub use formats::RenderOptions;
pub use registry::FormatRegistry;
pub use tags::{RegistryError, TagRegistry};

use formats::html::HtmlSerializer;

/// Converts a snapshot to the Intermediate Representation (IR).
///
/// Blocks are transformed into style runs, then list items are grouped into wrappers
/// according to `registry`.
pub fn to_ir(doc: &RawDocument, registry: &TagRegistry) -> ir::nodes::Document {
    tracing::debug!(blocks = doc.blocks.len(), "building ir");
    mappings::flat_to_nested::blocks_to_tree(
        mappings::transform::transform_blocks(&doc.blocks),
        registry,
    )
}

/// Render a snapshot with the built-in registry and default options.
pub fn to_html(doc: &RawDocument) -> Result<String, RenderError> {
    to_html_with(doc, TagRegistry::standard(), RenderOptions::default())
}

/// Render a snapshot with a given registry and options.
pub fn to_html_with(
    doc: &RawDocument,
    registry: &TagRegistry,
    options: RenderOptions,
) -> Result<String, RenderError> {
    HtmlSerializer::new(registry, options).serialize(&to_ir(doc, registry))
}
