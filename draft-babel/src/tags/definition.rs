//! Textual form of the tag registry, as read from configuration files.
//!
//! Identifiers are typed, tag names stay strings: an unknown block type is a legitimate
//! registry key, while an unknown tag name is a deployment error that
//! [`TagRegistry::from_definition`](super::TagRegistry::from_definition) reports.

use super::CssDeclaration;
use crate::document::{BlockType, InlineStyle, WrapperType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDefinition {
    #[serde(default)]
    pub blocks: BTreeMap<BlockType, BlockDefinition>,
    #[serde(default)]
    pub wrappers: BTreeMap<WrapperType, WrapperDefinition>,
    /// Declaration order is application order.
    #[serde(default)]
    pub inline_styles: Vec<InlineStyleDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<WrapperType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperDefinition {
    pub tag: String,
}

/// Exactly one of `tag` or `css` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyleDefinition {
    pub style: InlineStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<Vec<CssDeclaration>>,
}
