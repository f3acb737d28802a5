//! Identifiers shared by the editor snapshot and the tag registry.
//!
//! Block types and inline styles come from fixed enumerations, but the editor can hand us
//! identifiers outside them (a `code-block`, a custom `STRIKETHROUGH`). Those are kept as
//! `Other` so they reach the registry lookup instead of failing at deserialization time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

macro_rules! identifier {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// An identifier outside the known enumeration.
            Other(String),
        }

        impl $name {
            /// The wire identifier, as the editor spells it.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(name) => name.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match $name::from(value.as_str()) {
                    $name::Other(_) => $name::Other(value),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(name) => name,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

identifier! {
    /// Type of a top-level document block.
    pub enum BlockType {
        Unstyled => "unstyled",
        HeaderOne => "header-one",
        HeaderTwo => "header-two",
        HeaderThree => "header-three",
        HeaderFour => "header-four",
        HeaderFive => "header-five",
        HeaderSix => "header-six",
        Blockquote => "blockquote",
        UnorderedListItem => "unordered-list-item",
        OrderedListItem => "ordered-list-item",
    }
}

identifier! {
    /// Inline style attached to a single character.
    pub enum InlineStyle {
        Bold => "BOLD",
        Italic => "ITALIC",
        Underline => "UNDERLINE",
        Code => "CODE",
    }
}

identifier! {
    /// Kind of synthesized list container.
    pub enum WrapperType {
        UnorderedList => "unordered-list",
        OrderedList => "ordered-list",
    }
}

/// The set of inline styles active on one character.
///
/// Two characters share a style iff their sets are equal by value; the style-run extractor
/// relies on this (and never on identity) when deciding where a run ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterStyleSet(BTreeSet<InlineStyle>);

impl CharacterStyleSet {
    /// The empty set (an unstyled character).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `style` added.
    pub fn with(mut self, style: InlineStyle) -> Self {
        self.0.insert(style);
        self
    }

    pub fn contains(&self, style: &InlineStyle) -> bool {
        self.0.contains(style)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Styles in name order.
    pub fn iter(&self) -> impl Iterator<Item = &InlineStyle> {
        self.0.iter()
    }
}

impl FromIterator<InlineStyle> for CharacterStyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        CharacterStyleSet(iter.into_iter().collect())
    }
}

impl fmt::Display for CharacterStyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, style) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(style.as_str())?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers_round_trip_through_strings() {
        assert_eq!(BlockType::from("header-three"), BlockType::HeaderThree);
        assert_eq!(BlockType::HeaderThree.as_str(), "header-three");
        assert_eq!(InlineStyle::from("CODE"), InlineStyle::Code);
        assert_eq!(
            WrapperType::from("ordered-list"),
            WrapperType::OrderedList
        );
    }

    #[test]
    fn test_unknown_identifiers_are_kept() {
        let block = BlockType::from("code-block");
        assert_eq!(block, BlockType::Other("code-block".to_string()));
        assert_eq!(block.to_string(), "code-block");
        assert_eq!(String::from(block), "code-block");
    }

    #[test]
    fn test_identifier_serde_uses_wire_names() {
        let json = serde_json::to_string(&BlockType::UnorderedListItem).unwrap();
        assert_eq!(json, "\"unordered-list-item\"");

        let style: InlineStyle = serde_json::from_str("\"STRIKETHROUGH\"").unwrap();
        assert_eq!(style, InlineStyle::Other("STRIKETHROUGH".to_string()));
    }

    #[test]
    fn test_style_sets_compare_by_value() {
        let a = CharacterStyleSet::new()
            .with(InlineStyle::Bold)
            .with(InlineStyle::Italic);
        let b: CharacterStyleSet = [InlineStyle::Italic, InlineStyle::Bold]
            .into_iter()
            .collect();
        assert_eq!(a, b);
        assert_ne!(a, CharacterStyleSet::new().with(InlineStyle::Bold));
    }

    #[test]
    fn test_style_set_display() {
        let set = CharacterStyleSet::new()
            .with(InlineStyle::Italic)
            .with(InlineStyle::Bold);
        assert_eq!(set.to_string(), "{BOLD, ITALIC}");
        assert_eq!(CharacterStyleSet::new().to_string(), "{}");
    }
}
