#![forbid(unsafe_code)]

//! Token model.

use std::fmt;
use std::ops::Range;

// ---------------------------------------------------------------------------
// Token categories
// ---------------------------------------------------------------------------

/// Lexical category assigned to a span of source text.
///
/// Categories are mutually exclusive; every character of a line belongs to
/// exactly one token and therefore exactly one category.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenCategory {
    /// Unclassified text: whitespace, punctuation, ordinary identifiers.
    #[default]
    Plain,
    Keyword,
    /// Capitalized identifier (heuristic, not a checked type).
    Type,
    /// Identifier followed by `(`, optionally after spaces.
    Function,
    String,
    Comment,
    Number,
    Operator,
}

impl TokenCategory {
    /// All categories, in declaration order.
    pub const ALL: [TokenCategory; 8] = [
        Self::Plain,
        Self::Keyword,
        Self::Type,
        Self::Function,
        Self::String,
        Self::Comment,
        Self::Number,
        Self::Operator,
    ];

    /// Lowercase name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Function => "function",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Number => "number",
            Self::Operator => "operator",
        }
    }

    /// Whether this category receives highlighting at all.
    ///
    /// Plain text is rendered without a class or style.
    #[must_use]
    pub const fn is_highlighted(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A classified slice of one source line.
///
/// `line_index` and `ordinal` only serve as stable rendering keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub category: TokenCategory,
    /// Exact source text covered by the token.
    pub text: &'a str,
    /// Byte offset of `text` within its line.
    pub offset: usize,
    pub line_index: usize,
    /// Position of the token within its line, starting at 0.
    pub ordinal: usize,
}

impl<'a> Token<'a> {
    /// Byte range of the token within its line.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    /// Token length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
