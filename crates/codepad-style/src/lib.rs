#![forbid(unsafe_code)]

//! Styling for highlighted code.
//!
//! Mapping a [`codepad_syntax::TokenCategory`] to something visible is the
//! caller's business; this crate supplies the vocabulary for it ([`Rgb`],
//! [`Style`]) and ready-made [`HighlightTheme`]s.

pub mod color;
pub mod style;
pub mod theme;

pub use color::{ParseColorError, Rgb, Rgba};
pub use style::{Style, StyleFlags};
pub use theme::{HighlightTheme, HighlightThemeBuilder, ThemeName};
