#![forbid(unsafe_code)]

//! Editor-side consumers of the codepad tokenizer.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`editor`] | Styled, numbered lines with a trailing caret |
//! | [`export`] | HTML and ANSI renderings of an editor document |
//! | [`minimap`] | Per-line categories, colors and viewport geometry |
//! | [`config`] | Environment-driven view configuration |
//! | `logging` | `tracing-subscriber` bootstrap (feature `logging`) |
//!
//! Every render recomputes all lines from scratch; there is no caching.

pub mod config;
pub mod editor;
pub mod export;
#[cfg(feature = "logging")]
pub mod logging;
pub mod minimap;

pub use config::{ConfigError, ConfigParse, ViewConfig};
pub use editor::{EditorView, RenderedDocument, RenderedLine, StyledSpan};
pub use export::{AnsiExporter, HtmlExporter};
pub use minimap::{
    Indicator, LineCategory, Minimap, MinimapPalette, MinimapRow, VisibleRange, classify_line,
};
