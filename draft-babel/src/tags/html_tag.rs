//! The closed set of HTML elements the renderer knows how to emit.

use super::RegistryError;
use std::fmt;
use std::str::FromStr;

/// An HTML element the renderer implements.
///
/// Registry entries name one of these instead of a free-form string, so a registry that
/// has been built can never point the renderer at an element it cannot produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlTag {
    P,
    Strong,
    Em,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
    Span,
    Ul,
    Ol,
    Li,
}

impl HtmlTag {
    pub const ALL: [HtmlTag; 14] = [
        HtmlTag::P,
        HtmlTag::Strong,
        HtmlTag::Em,
        HtmlTag::H1,
        HtmlTag::H2,
        HtmlTag::H3,
        HtmlTag::H4,
        HtmlTag::H5,
        HtmlTag::H6,
        HtmlTag::Blockquote,
        HtmlTag::Span,
        HtmlTag::Ul,
        HtmlTag::Ol,
        HtmlTag::Li,
    ];

    /// Element name as written in markup.
    pub fn name(self) -> &'static str {
        match self {
            HtmlTag::P => "p",
            HtmlTag::Strong => "strong",
            HtmlTag::Em => "em",
            HtmlTag::H1 => "h1",
            HtmlTag::H2 => "h2",
            HtmlTag::H3 => "h3",
            HtmlTag::H4 => "h4",
            HtmlTag::H5 => "h5",
            HtmlTag::H6 => "h6",
            HtmlTag::Blockquote => "blockquote",
            HtmlTag::Span => "span",
            HtmlTag::Ul => "ul",
            HtmlTag::Ol => "ol",
            HtmlTag::Li => "li",
        }
    }
}

impl FromStr for HtmlTag {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HtmlTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| RegistryError::UnimplementedTag(s.to_string()))
    }
}

impl fmt::Display for HtmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
