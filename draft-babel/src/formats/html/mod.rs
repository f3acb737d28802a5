//! HTML format implementation
//!
//! Strategy: snapshot → IR → HTML string (one-way only)
//!
//! # Data Model
//!
//! | Snapshot element | HTML element | Notes |
//! |------------------|--------------|-------|
//! | unstyled | `<p>` | |
//! | header-one .. header-six | `<h1>` .. `<h6>` | |
//! | blockquote | `<blockquote>` | |
//! | unordered-list-item | `<li>` inside `<ul>` | nested by depth |
//! | ordered-list-item | `<li>` inside `<ol>` | nested by depth |
//! | BOLD / ITALIC | `<strong>` / `<em>` | |
//! | UNDERLINE / CODE | `<span style="...">` | CSS declarations from the registry |
//!
//! These are the built-in registry entries; a custom [`TagRegistry`] changes them.
//!
//! # Escaping
//!
//! Chunk text is emitted verbatim by default, so `<`, `>` and `&` typed into the editor end
//! up as markup. [`RenderOptions::escape_text`] turns on escaping of those three characters;
//! it is off by default because it changes the bytes produced for such text.
//!
//! # Example
//!
//! ```ignore
//! use draft_babel::formats::html::HtmlFormat;
//! use draft_babel::Format;
//!
//! let format = HtmlFormat::default();
//! let html = format.serialize(&document)?;
//! ```

pub mod serializer;

pub use serializer::HtmlSerializer;

use crate::document::RawDocument;
use crate::error::FormatError;
use crate::format::Format;
use crate::tags::TagRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Rendering knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Escape `&`, `<` and `>` in chunk text.
    #[serde(default)]
    pub escape_text: bool,
}

/// HTML output for a snapshot.
pub struct HtmlFormat {
    registry: Arc<TagRegistry>,
    options: RenderOptions,
}

impl HtmlFormat {
    pub fn new(registry: TagRegistry, options: RenderOptions) -> Self {
        HtmlFormat {
            registry: Arc::new(registry),
            options,
        }
    }
}

impl Default for HtmlFormat {
    fn default() -> Self {
        HtmlFormat::new(TagRegistry::default(), RenderOptions::default())
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        Ok(crate::to_html_with(doc, &self.registry, self.options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockType, RawBlock};
    use crate::tags::HtmlTag;

    #[test]
    fn test_html_format_name() {
        let format = HtmlFormat::default();
        assert_eq!(format.name(), "html");
    }

    #[test]
    fn test_html_format_capabilities() {
        let format = HtmlFormat::default();
        assert!(!format.supports_parsing());
        assert!(format.supports_serialization());
        assert!(format.parse("<p>x</p>").is_err());
    }

    #[test]
    fn test_html_format_extensions() {
        let format = HtmlFormat::default();
        assert_eq!(format.file_extensions(), &["html", "htm"]);
    }

    #[test]
    fn test_html_format_uses_its_registry() {
        let registry = TagRegistry::builder()
            .block(BlockType::Unstyled, HtmlTag::Blockquote)
            .build()
            .unwrap();
        let format = HtmlFormat::new(registry, RenderOptions::default());
        let doc = RawDocument::new(vec![RawBlock::plain(BlockType::Unstyled, "q")]);

        assert_eq!(format.serialize(&doc).unwrap(), "<blockquote>q</blockquote>");
    }

    #[test]
    fn test_html_format_reports_unhandled_types() {
        let format = HtmlFormat::default();
        let doc = RawDocument::new(vec![RawBlock::plain(
            BlockType::Other("atomic".into()),
            "",
        )]);

        let err = format.serialize(&doc).unwrap_err();
        assert_eq!(err.to_string(), "unhandled block type `atomic`");
    }
}
