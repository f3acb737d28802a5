//! HTML serialization (IR → HTML string)
//!
//! Walks the block/wrapper tree and emits markup for each node, looking every element up in
//! the tag registry. There are no separators between top-level nodes and no enclosing
//! document element; each rendering carries its own tags.
//!
//! Inside a wrapper, a nested wrapper belongs to the block before it and is emitted inside
//! that block's element:
//!
//! ```text
//! ul[ A, ul[ B, C ], D ]  =>  <ul><li>A<ul><li>B</li><li>C</li></ul></li><li>D</li></ul>
//! ```
//!
//! A nested wrapper with no block before it gets an empty `<li>` of its own so the markup
//! stays valid.

use super::RenderOptions;
use crate::document::{BlockType, WrapperType};
use crate::error::RenderError;
use crate::ir::nodes::{Block, Chunk, Document, Node, WrapperBlock};
use crate::tags::{CssDeclaration, HtmlTag, InlineRendering, TagRegistry};
use std::borrow::Cow;

/// Renders IR documents against a tag registry.
pub struct HtmlSerializer<'r> {
    registry: &'r TagRegistry,
    options: RenderOptions,
}

impl<'r> HtmlSerializer<'r> {
    pub fn new(registry: &'r TagRegistry, options: RenderOptions) -> Self {
        HtmlSerializer { registry, options }
    }

    /// Render the whole document, or fail on the first node the registry cannot handle.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = doc.children.len()))]
    pub fn serialize(&self, doc: &Document) -> Result<String, RenderError> {
        let mut out = String::new();
        for node in &doc.children {
            self.write_node(node, &mut out)?;
        }
        tracing::debug!(bytes = out.len(), "rendered html");
        Ok(out)
    }

    fn write_node(&self, node: &Node, out: &mut String) -> Result<(), RenderError> {
        match node {
            Node::Block(block) => self.write_block(block, &[], out),
            Node::Wrapper(wrapper) => self.write_wrapper(wrapper, out),
        }
    }

    fn write_block(
        &self,
        block: &Block,
        nested: &[&WrapperBlock],
        out: &mut String,
    ) -> Result<(), RenderError> {
        let tag = self.block_tag(&block.block_type)?;
        open(tag, out);
        for chunk in &block.chunks {
            self.write_chunk(chunk, out);
        }
        for wrapper in nested {
            self.write_wrapper(wrapper, out)?;
        }
        close(tag, out);
        Ok(())
    }

    fn write_wrapper(&self, wrapper: &WrapperBlock, out: &mut String) -> Result<(), RenderError> {
        let tag = self.wrapper_tag(&wrapper.wrapper_type)?;
        open(tag, out);

        let mut children = wrapper.children.iter().peekable();
        while let Some(child) = children.next() {
            let mut nested = Vec::new();
            while let Some(Node::Wrapper(following)) =
                children.next_if(|next| matches!(next, Node::Wrapper(_)))
            {
                nested.push(following);
            }

            match child {
                Node::Block(block) => self.write_block(block, &nested, out)?,
                Node::Wrapper(orphan) => {
                    open(HtmlTag::Li, out);
                    self.write_wrapper(orphan, out)?;
                    for wrapper in nested {
                        self.write_wrapper(wrapper, out)?;
                    }
                    close(HtmlTag::Li, out);
                }
            }
        }

        close(tag, out);
        Ok(())
    }

    /// Apply every registry style present on the chunk, in declaration order. Each one wraps
    /// the content produced so far, so the first declared style ends up innermost.
    fn write_chunk(&self, chunk: &Chunk, out: &mut String) {
        let text = if self.options.escape_text {
            escape_text(&chunk.text)
        } else {
            Cow::Borrowed(chunk.text.as_str())
        };

        let content = self
            .registry
            .inline_styles()
            .filter(|(style, _)| chunk.style.contains(style))
            .fold(text.into_owned(), |content, (_, rendering)| {
                apply_inline(rendering, &content)
            });
        out.push_str(&content);
    }

    fn block_tag(&self, block_type: &BlockType) -> Result<HtmlTag, RenderError> {
        self.registry
            .block(block_type)
            .map(|entry| entry.tag)
            .ok_or_else(|| RenderError::UnhandledBlockType(block_type.clone()))
    }

    fn wrapper_tag(&self, wrapper_type: &WrapperType) -> Result<HtmlTag, RenderError> {
        self.registry
            .wrapper(wrapper_type)
            .map(|entry| entry.tag)
            .ok_or_else(|| RenderError::UnhandledWrapperType(wrapper_type.clone()))
    }
}

fn open(tag: HtmlTag, out: &mut String) {
    out.push('<');
    out.push_str(tag.name());
    out.push('>');
}

fn close(tag: HtmlTag, out: &mut String) {
    out.push_str("</");
    out.push_str(tag.name());
    out.push('>');
}

fn apply_inline(rendering: &InlineRendering, content: &str) -> String {
    match rendering {
        InlineRendering::Tag(tag) => format!("<{tag}>{content}</{tag}>"),
        InlineRendering::Css(css) => {
            format!("<span style=\"{}\">{content}</span>", stylify(css))
        }
    }
}

/// `property:value;` for every declaration, in order.
fn stylify(css: &[CssDeclaration]) -> String {
    css.iter()
        .map(|d| format!("{}:{};", d.property, d.value))
        .collect()
}

fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
