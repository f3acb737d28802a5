use super::{HtmlTag, TagRegistryBuilder};
use crate::document::{BlockType, InlineStyle, WrapperType};

/// Entries of the built-in registry.
///
/// ITALIC is declared before BOLD: the first declared style is applied first and so ends up
/// innermost, giving `<strong><em>..</em></strong>` for bold italic text.
pub(super) fn builder() -> TagRegistryBuilder {
    TagRegistryBuilder::default()
        .block(BlockType::Unstyled, HtmlTag::P)
        .block(BlockType::HeaderOne, HtmlTag::H1)
        .block(BlockType::HeaderTwo, HtmlTag::H2)
        .block(BlockType::HeaderThree, HtmlTag::H3)
        .block(BlockType::HeaderFour, HtmlTag::H4)
        .block(BlockType::HeaderFive, HtmlTag::H5)
        .block(BlockType::HeaderSix, HtmlTag::H6)
        .block(BlockType::Blockquote, HtmlTag::Blockquote)
        .list_item(
            BlockType::UnorderedListItem,
            HtmlTag::Li,
            WrapperType::UnorderedList,
        )
        .list_item(
            BlockType::OrderedListItem,
            HtmlTag::Li,
            WrapperType::OrderedList,
        )
        .wrapper(WrapperType::UnorderedList, HtmlTag::Ul)
        .wrapper(WrapperType::OrderedList, HtmlTag::Ol)
        .inline_tag(InlineStyle::Italic, HtmlTag::Em)
        .inline_tag(InlineStyle::Bold, HtmlTag::Strong)
        .inline_css(InlineStyle::Underline, [("text-decoration", "underline")])
        .inline_css(
            InlineStyle::Code,
            [
                ("background-color", "rgba(0, 0, 0, 0.5)"),
                (
                    "font-family",
                    "'Inconsolata', 'Menlo', 'Consolas', monospace",
                ),
                ("font-size", "16px"),
                ("padding", "2px"),
            ],
        )
}
