//! The `Format` trait: one text representation of an editor snapshot.
//!
//! A format reads text into a [`RawDocument`], writes a [`RawDocument`] as text, or both.
//! Every conversion goes through the snapshot, so adding a format never touches the others.

use crate::document::RawDocument;
use crate::error::FormatError;

/// A named text representation of snapshots
///
/// Only `name` is required. A format declares the directions it supports; the default
/// `parse` and `serialize` refuse with [`FormatError::NotSupported`].
///
/// # Examples
///
/// ```ignore
/// struct BlockCount;
///
/// impl Format for BlockCount {
///     fn name(&self) -> &str {
///         "block-count"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
///         Ok(doc.blocks.len().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// Name used to select the format ("html", "json", ...)
    fn name(&self) -> &str;

    /// One line for format listings
    fn description(&self) -> &str {
        ""
    }

    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Text → snapshot
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Snapshot → text
    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<RawDocument, FormatError> {
        Err(FormatError::NotSupported(format!(
            "'{}' cannot be read",
            self.name()
        )))
    }

    fn serialize(&self, _doc: &RawDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "'{}' cannot be written",
            self.name()
        )))
    }
}
