#![forbid(unsafe_code)]

//! Line tokenizer for editor highlighting.
//!
//! Source text is classified one line at a time into a flat sequence of
//! [`Token`]s. The sequence covers the line exactly: concatenating every
//! token's text reproduces the input byte for byte.
//!
//! Only `typescript` and `javascript` get full classification. Every other
//! language tag falls back to a single [`TokenCategory::Plain`] token per line.
//!
//! # Example
//!
//! ```
//! use codepad_syntax::{TokenCategory, tokenize_line};
//!
//! let tokens = tokenize_line("if (x) {", "typescript");
//! assert_eq!(tokens[0].category, TokenCategory::Keyword);
//! assert_eq!(tokens[0].text, "if");
//! ```
//!
//! The classifications are highlighting heuristics. A [`TokenCategory::Type`]
//! token is any capitalized identifier, not a checked type.

pub mod document;
pub mod language;
pub mod token;
pub mod tokenizer;

pub use document::{TokenLine, TokenizedDocument, split_lines};
pub use language::{BUILTIN_LANGUAGES, JAVASCRIPT, LanguageSpec, TYPESCRIPT};
pub use token::{Token, TokenCategory};
pub use tokenizer::{
    LineTokenizer, PlainTokenizer, ScriptTokenizer, tokenize_line, tokenize_line_at,
    tokenizer_for, validate_tokens,
};
