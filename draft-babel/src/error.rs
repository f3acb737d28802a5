//! Error types for format operations.

use crate::document::{BlockType, DocumentError, WrapperType};
use crate::tags::RegistryError;
use thiserror::Error;

/// A render failed. Rendering is all or nothing: no partial markup is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unhandled block type `{0}`")]
    UnhandledBlockType(BlockType),

    #[error("unhandled wrapper type `{0}`")]
    UnhandledWrapperType(WrapperType),
}

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
