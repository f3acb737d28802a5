//! JSON snapshot format
//!
//! Parses both block shapes described in [`crate::document::raw`] and serializes back to the
//! per-character shape, pretty printed. Serializing is the snapshot half of a debug view:
//! print this next to the HTML output to see what produced it.

use crate::document::RawDocument;
use crate::error::FormatError;
use crate::format::Format;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Editor snapshot as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<RawDocument, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &RawDocument) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
