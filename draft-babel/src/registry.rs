//! Output formats by name
//!
//! The CLI and any other front end pick a format by the name a user typed. Names are kept
//! sorted, so listings come out in a stable order.

use crate::document::RawDocument;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{HtmlFormat, JsonFormat, RenderOptions, TreevizFormat};
use crate::tags::TagRegistry;
use std::collections::BTreeMap;

/// Named set of formats
///
/// # Examples
///
/// ```ignore
/// let formats = FormatRegistry::with_defaults();
/// let html = formats.convert(snapshot_json, "json", "html")?;
/// ```
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// A registry with no formats
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// The built-in formats, rendering through the built-in tag registry
    pub fn with_defaults() -> Self {
        Self::with_tags(TagRegistry::default(), RenderOptions::default())
    }

    /// The built-in formats, with `html` and `treeviz` using `tags`
    pub fn with_tags(tags: TagRegistry, options: RenderOptions) -> Self {
        let mut formats = Self::new();
        formats.register(JsonFormat);
        formats.register(TreevizFormat::new(tags.clone()));
        formats.register(HtmlFormat::new(tags, options));
        formats
    }

    /// Add `format` under its own name, replacing a format of the same name
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        if self.formats.insert(name.clone(), Box::new(format)).is_some() {
            tracing::debug!(%name, "replaced format");
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        match self.formats.get(name) {
            Some(format) => Ok(format.as_ref()),
            None => Err(FormatError::FormatNotFound(name.to_string())),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Every format, sorted by name
    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.values().map(|format| format.as_ref())
    }

    /// Read a snapshot written in `format`
    pub fn parse(&self, source: &str, format: &str) -> Result<RawDocument, FormatError> {
        let reader = self.get(format)?;
        if !reader.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "'{format}' is an output-only format"
            )));
        }
        reader.parse(source)
    }

    /// Write a snapshot in `format`
    pub fn serialize(&self, doc: &RawDocument, format: &str) -> Result<String, FormatError> {
        let writer = self.get(format)?;
        if !writer.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "'{format}' is an input-only format"
            )));
        }
        writer.serialize(doc)
    }

    /// Parse `source` with `from` and write the snapshot with `to`
    ///
    /// Both names are looked up before anything is parsed.
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        self.get(from)?;
        self.get(to)?;
        let doc = self.parse(source, from)?;
        self.serialize(&doc, to)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
