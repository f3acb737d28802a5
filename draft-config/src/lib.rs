//! Shared configuration loader for the draft toolchain.
//!
//! `defaults/draft.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DraftConfig`].
//!
//! The registry section stays textual until [`DraftConfig::tag_registry`]
//! validates it; callers do that once at startup and stop on error.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use draft_babel::formats::RenderOptions;
use draft_babel::tags::{RegistryDefinition, RegistryError, TagRegistry};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/draft.default.toml");

/// Top-level configuration consumed by draft applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    pub render: RenderOptions,
    pub registry: RegistryDefinition,
}

impl DraftConfig {
    /// Validate the registry section.
    pub fn tag_registry(&self) -> Result<TagRegistry, RegistryError> {
        TagRegistry::from_definition(&self.registry)
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render
    }
}

/// Builds a [`DraftConfig`] from the embedded defaults plus any number of layers.
///
/// Later layers win key by key. Arrays (such as `registry.inline_styles`) are replaced as a
/// whole, so a user file that declares inline styles declares all of them.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Set one dotted key, above every file layer (for command line flags).
    pub fn set_override<V>(self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        Ok(Loader {
            builder: self.builder.set_override(key, value)?,
        })
    }

    /// Merge every layer and deserialize. The registry section is not validated here; see
    /// [`DraftConfig::tag_registry`].
    pub fn build(self) -> Result<DraftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        Loader {
            builder: self.builder.add_source(file),
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<DraftConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_babel::document::{BlockType, InlineStyle};
    use draft_babel::tags::{HtmlTag, InlineRendering};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(!config.render_options().escape_text);
        assert_eq!(config.registry.blocks.len(), 10);
        assert_eq!(config.registry.wrappers.len(), 2);
        assert_eq!(config.registry.inline_styles.len(), 4);
    }

    #[test]
    fn defaults_describe_the_built_in_registry() {
        let registry = load_defaults()
            .expect("defaults to deserialize")
            .tag_registry()
            .expect("defaults to validate");
        assert_eq!(&registry, TagRegistry::standard());
    }

    #[test]
    fn default_inline_styles_keep_file_order() {
        let config = load_defaults().expect("defaults to deserialize");
        let order: Vec<_> = config
            .registry
            .inline_styles
            .iter()
            .map(|s| s.style.clone())
            .collect();
        assert_eq!(
            order,
            vec![
                InlineStyle::Italic,
                InlineStyle::Bold,
                InlineStyle::Underline,
                InlineStyle::Code
            ]
        );
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.escape_text", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.render_options().escape_text);
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let file = toml_file(
            r#"
            [registry.blocks.unstyled]
            tag = "span"

            [registry.blocks.code-block]
            tag = "blockquote"
            "#,
        );

        let registry = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build")
            .tag_registry()
            .expect("registry to validate");

        assert_eq!(
            registry.block(&BlockType::Unstyled).map(|e| e.tag),
            Some(HtmlTag::Span)
        );
        assert_eq!(
            registry
                .block(&BlockType::Other("code-block".into()))
                .map(|e| e.tag),
            Some(HtmlTag::Blockquote)
        );
        assert_eq!(
            registry.block(&BlockType::HeaderOne).map(|e| e.tag),
            Some(HtmlTag::H1)
        );
    }

    #[test]
    fn unimplemented_tag_is_rejected() {
        let file = toml_file(
            r#"
            [registry.blocks.blockquote]
            tag = "aside"
            "#,
        );

        let err = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build")
            .tag_registry()
            .unwrap_err();
        assert_eq!(err, RegistryError::UnimplementedTag("aside".to_string()));
    }

    #[test]
    fn list_item_without_wrapper_is_rejected() {
        let file = toml_file(
            r#"
            [registry.blocks.checkable-list-item]
            tag = "li"
            "#,
        );

        let err = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build")
            .tag_registry()
            .unwrap_err();
        assert!(matches!(err, RegistryError::MissingWrapper { .. }));
    }

    #[test]
    fn inline_styles_can_be_replaced() {
        let file = toml_file(
            r#"
            [[registry.inline_styles]]
            style = "BOLD"
            css = [{ property = "font-weight", value = "bold" }]
            "#,
        );

        let registry = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build")
            .tag_registry()
            .expect("registry to validate");
        let styles: Vec<_> = registry.inline_styles().collect();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].0, &InlineStyle::Bold);
        assert!(matches!(styles[0].1, InlineRendering::Css(css) if css.len() == 1));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/draft.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/draft.toml")
            .build()
            .expect("config to build");
        assert!(config.tag_registry().is_ok());
    }
}
