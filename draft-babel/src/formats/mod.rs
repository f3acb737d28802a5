//! Format implementations
//!
//! This module contains all format implementations that convert between the editor snapshot
//! and various text representations.

pub mod html;
pub mod json;
pub mod treeviz;

pub use html::{HtmlFormat, RenderOptions};
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
