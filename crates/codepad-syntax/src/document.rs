#![forbid(unsafe_code)]

//! Whole-document tokenization.
//!
//! A document is split on `\n` and every line is tokenized independently.
//! Nothing carries over between lines, so a string or comment left open at
//! the end of one line has no effect on the next.

use std::ops::Range;

use crate::language::LanguageSpec;
use crate::token::Token;
use crate::tokenizer::{tokenizer_for, validate_tokens};

/// Split a document into lines the way the editor does.
///
/// Splits on `\n` only; a trailing `\r` stays part of its line and an empty
/// document is one empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Tokens for a single document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine<'a> {
    pub index: usize,
    pub text: &'a str,
    pub tokens: Vec<Token<'a>>,
}

/// Tokenization of a full document, recomputed from scratch on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedDocument<'a> {
    language: String,
    lines: Vec<TokenLine<'a>>,
}

impl<'a> TokenizedDocument<'a> {
    /// Tokenize every line of `text`.
    #[must_use]
    pub fn new(text: &'a str, language: &str) -> Self {
        let sources: Vec<&'a str> = split_lines(text).collect();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "tokenize_document",
            language,
            lines = sources.len(),
            bytes = text.len()
        )
        .entered();

        let tokenizer = tokenizer_for(language);
        let lines = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                let tokens = tokenizer.tokenize_line(source, index);
                debug_assert!(validate_tokens(source, &tokens));
                TokenLine {
                    index,
                    text: source,
                    tokens,
                }
            })
            .collect();

        Self {
            language: language.to_owned(),
            lines,
        }
    }

    /// Language tag the document was tokenized with.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the language received full classification (vs. the plain fallback).
    #[must_use]
    pub fn is_classified(&self) -> bool {
        LanguageSpec::for_tag(&self.language).is_some()
    }

    #[must_use]
    pub fn lines(&self) -> &[TokenLine<'a>] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&TokenLine<'a>> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Tokens on `line_index` that overlap the byte range `range`.
    #[must_use]
    pub fn tokens_in_range(&self, line_index: usize, range: Range<usize>) -> Vec<&Token<'a>> {
        let Some(line) = self.lines.get(line_index) else {
            return Vec::new();
        };
        line.tokens
            .iter()
            .filter(|token| token.offset < range.end && token.range().end > range.start)
            .collect()
    }

    /// Iterate over every token in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token<'a>> {
        self.lines.iter().flat_map(|line| line.tokens.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenCategory;

    const SAMPLE: &str = "import React from 'react';\n\nfunction App() {\n  return 1; // one\n}";

    #[test]
    fn splits_on_newline_only() {
        let lines: Vec<_> = split_lines("a\r\nb\n").collect();
        assert_eq!(lines, vec!["a\r", "b", ""]);
        assert_eq!(split_lines("").count(), 1);
    }

    #[test]
    fn document_lines_are_indexed() {
        let doc = TokenizedDocument::new(SAMPLE, "typescript");
        assert_eq!(doc.line_count(), 5);
        assert!(doc.is_classified());
        for (i, line) in doc.lines().iter().enumerate() {
            assert_eq!(line.index, i);
            assert!(line.tokens.iter().all(|t| t.line_index == i));
        }
        assert!(doc.line(1).is_some_and(|line| line.tokens.is_empty()));
    }

    #[test]
    fn lines_reassemble_the_document() {
        let doc = TokenizedDocument::new(SAMPLE, "typescript");
        let rebuilt: Vec<String> = doc
            .lines()
            .iter()
            .map(|line| line.tokens.iter().map(|t| t.text).collect())
            .collect();
        assert_eq!(rebuilt.join("\n"), SAMPLE);
    }

    #[test]
    fn unterminated_string_does_not_leak_to_next_line() {
        let doc = TokenizedDocument::new("let s = 'open\nlet t = 1;", "javascript");
        let second = &doc.lines()[1].tokens;
        assert_eq!(second[0].category, TokenCategory::Keyword);
        assert_eq!(second[0].text, "let");
    }

    #[test]
    fn fallback_document_is_plain() {
        let doc = TokenizedDocument::new("a { }\n\nb { }", "css");
        assert!(!doc.is_classified());
        assert!(doc.tokens().all(|t| t.category == TokenCategory::Plain));
        assert_eq!(doc.tokens().count(), 2);
    }

    #[test]
    fn tokens_in_range_filters_overlap() {
        let doc = TokenizedDocument::new(SAMPLE, "typescript");
        // "function App() {": function (0..8), " " (8..9), App (9..12)
        let hits = doc.tokens_in_range(2, 7..10);
        let texts: Vec<_> = hits.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["function", " ", "App"]);
        assert!(doc.tokens_in_range(99, 0..1).is_empty());
    }
}
