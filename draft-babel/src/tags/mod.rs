//! Tag registry: which markup each block type, wrapper type and inline style becomes.
//!
//!     The registry has three tables:
//!
//!     - block type → element (plus, for list items, the wrapper type that groups them)
//!     - wrapper type → element (`ul` / `ol`)
//!     - inline style → element, or a set of CSS declarations rendered on a `span`
//!
//!     Inline styles are kept in declaration order, which is also the order they are applied
//!     in (the first declared style ends up innermost).
//!
//!     A registry is only obtainable through [`TagRegistryBuilder::build`] or
//!     [`TagRegistry::from_definition`], both of which validate it. Validation happens once,
//!     when the process starts; rendering never re-checks it.

pub mod definition;
pub mod html_tag;
mod standard;

pub use definition::{
    BlockDefinition, InlineStyleDefinition, RegistryDefinition, WrapperDefinition,
};
pub use html_tag::HtmlTag;

use crate::document::{BlockType, InlineStyle, WrapperType};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A broken registry. These are startup-fatal: they describe a bad deployment, not a bad
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("html must implement `{0}`")]
    UnimplementedTag(String),

    #[error("list item block type `{block}` declares no wrapper type")]
    MissingWrapper { block: BlockType },

    #[error("block type `{block}` uses wrapper type `{wrapper}`, which has no entry")]
    UndeclaredWrapper {
        block: BlockType,
        wrapper: WrapperType,
    },

    #[error("inline style `{style}` must declare exactly one of `tag` or `css`")]
    AmbiguousInlineStyle { style: InlineStyle },

    #[error("inline style `{style}` declares an empty css set")]
    EmptyCss { style: InlineStyle },

    #[error("inline style `{style}` has an invalid css declaration `{declaration}`")]
    InvalidCss {
        style: InlineStyle,
        declaration: String,
    },

    #[error("inline style `{style}` is declared more than once")]
    DuplicateInlineStyle { style: InlineStyle },
}

/// One `property:value;` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssDeclaration {
    pub property: String,
    pub value: String,
}

impl CssDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        CssDeclaration {
            property: property.into(),
            value: value.into(),
        }
    }

    fn is_valid(&self) -> bool {
        let forbidden = |c: char| matches!(c, '"' | '<' | '>');
        !self.property.trim().is_empty()
            && !self.property.contains(forbidden)
            && !self.value.contains(forbidden)
    }
}

/// How an inline style is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineRendering {
    Tag(HtmlTag),
    Css(Vec<CssDeclaration>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEntry {
    pub tag: HtmlTag,
    /// Set for list items only.
    pub wrapper: Option<WrapperType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperEntry {
    pub tag: HtmlTag,
}

/// Validated mapping from document identifiers to markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistry {
    blocks: HashMap<BlockType, BlockEntry>,
    wrappers: HashMap<WrapperType, WrapperEntry>,
    inline_styles: Vec<(InlineStyle, InlineRendering)>,
}

static STANDARD: Lazy<TagRegistry> = Lazy::new(|| {
    standard::builder()
        .build()
        .unwrap_or_else(|err| panic!("built-in tag registry is invalid: {err}"))
});

impl TagRegistry {
    pub fn builder() -> TagRegistryBuilder {
        TagRegistryBuilder::default()
    }

    /// The built-in registry, validated on first use.
    pub fn standard() -> &'static TagRegistry {
        &STANDARD
    }

    /// Validate a textual definition into a registry.
    pub fn from_definition(definition: &RegistryDefinition) -> Result<Self, RegistryError> {
        let mut builder = TagRegistry::builder();

        for (block_type, block) in &definition.blocks {
            let tag = block.tag.parse()?;
            builder = match &block.wrapper {
                Some(wrapper) => builder.list_item(block_type.clone(), tag, wrapper.clone()),
                None => builder.block(block_type.clone(), tag),
            };
        }

        for (wrapper_type, wrapper) in &definition.wrappers {
            builder = builder.wrapper(wrapper_type.clone(), wrapper.tag.parse()?);
        }

        for inline in &definition.inline_styles {
            builder = match (&inline.tag, &inline.css) {
                (Some(tag), None) => builder.inline_tag(inline.style.clone(), tag.parse()?),
                (None, Some(css)) => builder.inline_css(
                    inline.style.clone(),
                    css.iter().map(|d| (d.property.clone(), d.value.clone())),
                ),
                _ => {
                    return Err(RegistryError::AmbiguousInlineStyle {
                        style: inline.style.clone(),
                    })
                }
            };
        }

        builder.build()
    }

    /// Back to the textual form. `from_definition(&r.to_definition())` yields `r`.
    pub fn to_definition(&self) -> RegistryDefinition {
        RegistryDefinition {
            blocks: self
                .blocks
                .iter()
                .map(|(block_type, entry)| {
                    let definition = BlockDefinition {
                        tag: entry.tag.name().to_string(),
                        wrapper: entry.wrapper.clone(),
                    };
                    (block_type.clone(), definition)
                })
                .collect(),
            wrappers: self
                .wrappers
                .iter()
                .map(|(wrapper_type, entry)| {
                    let definition = WrapperDefinition {
                        tag: entry.tag.name().to_string(),
                    };
                    (wrapper_type.clone(), definition)
                })
                .collect(),
            inline_styles: self
                .inline_styles
                .iter()
                .map(|(style, rendering)| match rendering {
                    InlineRendering::Tag(tag) => InlineStyleDefinition {
                        style: style.clone(),
                        tag: Some(tag.name().to_string()),
                        css: None,
                    },
                    InlineRendering::Css(css) => InlineStyleDefinition {
                        style: style.clone(),
                        tag: None,
                        css: Some(css.clone()),
                    },
                })
                .collect(),
        }
    }

    pub fn block(&self, block_type: &BlockType) -> Option<&BlockEntry> {
        self.blocks.get(block_type)
    }

    pub fn wrapper(&self, wrapper_type: &WrapperType) -> Option<&WrapperEntry> {
        self.wrappers.get(wrapper_type)
    }

    /// The wrapper type grouping blocks of this type, if they are list items.
    pub fn wrapper_type_for(&self, block_type: &BlockType) -> Option<&WrapperType> {
        self.block(block_type).and_then(|entry| entry.wrapper.as_ref())
    }

    /// Inline styles in declaration order.
    pub fn inline_styles(&self) -> impl Iterator<Item = (&InlineStyle, &InlineRendering)> {
        self.inline_styles.iter().map(|(style, rendering)| (style, rendering))
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        TagRegistry::standard().clone()
    }
}

/// Accumulates registry entries; [`build`](Self::build) validates them.
#[derive(Debug, Clone, Default)]
pub struct TagRegistryBuilder {
    blocks: HashMap<BlockType, BlockEntry>,
    wrappers: HashMap<WrapperType, WrapperEntry>,
    inline_styles: Vec<(InlineStyle, InlineRendering)>,
}

impl TagRegistryBuilder {
    /// A non-list block rendered as `tag`. Replaces any earlier entry for `block_type`.
    pub fn block(mut self, block_type: BlockType, tag: HtmlTag) -> Self {
        self.blocks.insert(block_type, BlockEntry { tag, wrapper: None });
        self
    }

    /// A list item rendered as `tag`, grouped under `wrapper`.
    pub fn list_item(mut self, block_type: BlockType, tag: HtmlTag, wrapper: WrapperType) -> Self {
        self.blocks.insert(
            block_type,
            BlockEntry {
                tag,
                wrapper: Some(wrapper),
            },
        );
        self
    }

    pub fn wrapper(mut self, wrapper_type: WrapperType, tag: HtmlTag) -> Self {
        self.wrappers.insert(wrapper_type, WrapperEntry { tag });
        self
    }

    pub fn inline_tag(mut self, style: InlineStyle, tag: HtmlTag) -> Self {
        self.inline_styles.push((style, InlineRendering::Tag(tag)));
        self
    }

    pub fn inline_css<I, P, V>(mut self, style: InlineStyle, declarations: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
        V: Into<String>,
    {
        let css = declarations
            .into_iter()
            .map(|(property, value)| CssDeclaration::new(property, value))
            .collect();
        self.inline_styles.push((style, InlineRendering::Css(css)));
        self
    }

    pub fn build(self) -> Result<TagRegistry, RegistryError> {
        let mut blocks: Vec<_> = self.blocks.iter().collect();
        blocks.sort_by(|a, b| a.0.cmp(b.0));

        for (block_type, entry) in blocks {
            match &entry.wrapper {
                None if entry.tag == HtmlTag::Li => {
                    return Err(RegistryError::MissingWrapper {
                        block: block_type.clone(),
                    });
                }
                Some(wrapper) if !self.wrappers.contains_key(wrapper) => {
                    return Err(RegistryError::UndeclaredWrapper {
                        block: block_type.clone(),
                        wrapper: wrapper.clone(),
                    });
                }
                _ => {}
            }
        }

        for (i, (style, rendering)) in self.inline_styles.iter().enumerate() {
            if self.inline_styles[..i].iter().any(|(seen, _)| seen == style) {
                return Err(RegistryError::DuplicateInlineStyle {
                    style: style.clone(),
                });
            }
            if let InlineRendering::Css(css) = rendering {
                if css.is_empty() {
                    return Err(RegistryError::EmptyCss {
                        style: style.clone(),
                    });
                }
                if let Some(bad) = css.iter().find(|d| !d.is_valid()) {
                    return Err(RegistryError::InvalidCss {
                        style: style.clone(),
                        declaration: format!("{}:{}", bad.property, bad.value),
                    });
                }
            }
        }

        tracing::debug!(
            blocks = self.blocks.len(),
            wrappers = self.wrappers.len(),
            inline_styles = self.inline_styles.len(),
            "tag registry validated"
        );

        Ok(TagRegistry {
            blocks: self.blocks,
            wrappers: self.wrappers,
            inline_styles: self.inline_styles,
        })
    }
}
