#![forbid(unsafe_code)]

//! Single-pass line scanner.
//!
//! The scan walks the line left to right with one cursor and a pending plain
//! region. At each position the first matching rule wins, in this order:
//!
//! 1. line comment (`//` outside a string) to end of line
//! 2. string continuation / close on the same quote not preceded by `\`
//! 3. string start on `"`, `'` or `` ` ``
//! 4. word `[A-Za-z_$][A-Za-z0-9_$]*` as keyword, type, function or plain
//! 5. number `[0-9][0-9.]*`
//! 6. operator, with two-character compounds taken greedily
//! 7. anything else joins the pending plain region
//!
//! Every special character is ASCII, so token boundaries always fall on
//! UTF-8 character boundaries and non-ASCII text simply stays plain.

use crate::language::{JAVASCRIPT, LanguageSpec, TYPESCRIPT};
use crate::token::{Token, TokenCategory};

// ---------------------------------------------------------------------------
// Tokenizer trait
// ---------------------------------------------------------------------------

/// Tokenizes one line at a time with no state carried between lines.
pub trait LineTokenizer: Send + Sync {
    /// Human-readable name (e.g. "TypeScript", "Plain").
    fn name(&self) -> &'static str;

    /// Tokenize `line`, stamping each token with `line_index`.
    ///
    /// The result partitions `line` exactly; an empty line yields no tokens.
    fn tokenize_line<'a>(&self, line: &'a str, line_index: usize) -> Vec<Token<'a>>;
}

// ---------------------------------------------------------------------------
// Token sink
// ---------------------------------------------------------------------------

/// Collects tokens and tracks the start of the not-yet-emitted plain region.
struct TokenSink<'a> {
    line: &'a str,
    line_index: usize,
    pending: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenSink<'a> {
    fn new(line: &'a str, line_index: usize) -> Self {
        Self {
            line,
            line_index,
            pending: 0,
            tokens: Vec::new(),
        }
    }

    fn push(&mut self, category: TokenCategory, start: usize, end: usize) {
        debug_assert!(start < end && end <= self.line.len());
        self.tokens.push(Token {
            category,
            text: &self.line[start..end],
            offset: start,
            line_index: self.line_index,
            ordinal: self.tokens.len(),
        });
    }

    /// Emit everything pending before `upto` as one plain token.
    fn flush_plain(&mut self, upto: usize) {
        if upto > self.pending {
            self.push(TokenCategory::Plain, self.pending, upto);
            self.pending = upto;
        }
    }

    fn emit(&mut self, category: TokenCategory, start: usize, end: usize) {
        self.flush_plain(start);
        self.push(category, start, end);
        self.pending = end;
    }

    fn finish(mut self) -> Vec<Token<'a>> {
        self.flush_plain(self.line.len());
        self.tokens
    }
}

// ---------------------------------------------------------------------------
// ScriptTokenizer
// ---------------------------------------------------------------------------

/// The classifying scanner, driven by a [`LanguageSpec`].
#[derive(Debug, Clone, Copy)]
pub struct ScriptTokenizer {
    spec: &'static LanguageSpec,
}

impl ScriptTokenizer {
    pub const fn new(spec: &'static LanguageSpec) -> Self {
        Self { spec }
    }

    /// Classify the word `line[start..end]`, or `None` if it stays plain.
    fn classify_word(&self, line: &str, start: usize, end: usize) -> Option<TokenCategory> {
        let word = &line[start..end];
        if self.spec.is_keyword(word) {
            return Some(TokenCategory::Keyword);
        }
        if line.as_bytes()[start].is_ascii_uppercase() {
            return Some(TokenCategory::Type);
        }
        // Only spaces are skipped; a tab before `(` breaks the call heuristic.
        let rest = &line.as_bytes()[end..];
        let next = rest.iter().find(|&&b| b != b' ');
        if next == Some(&b'(') {
            return Some(TokenCategory::Function);
        }
        None
    }
}

fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'='
            | b'<'
            | b'>'
            | b'!'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b':'
            | b'.'
    )
}

impl LineTokenizer for ScriptTokenizer {
    fn name(&self) -> &'static str {
        self.spec.name
    }

    fn tokenize_line<'a>(&self, line: &'a str, line_index: usize) -> Vec<Token<'a>> {
        let bytes = line.as_bytes();
        let comment = self.spec.line_comment.as_bytes();
        let mut sink = TokenSink::new(line, line_index);
        // (quote byte, offset of the opening quote)
        let mut open_string: Option<(u8, usize)> = None;
        let mut pos = 0;

        while pos < bytes.len() {
            let ch = bytes[pos];

            if let Some((quote, start)) = open_string {
                // `pos > start` here, so the lookbehind is always in bounds.
                if ch == quote && bytes[pos - 1] != b'\\' {
                    sink.emit(TokenCategory::String, start, pos + 1);
                    open_string = None;
                }
                pos += 1;
                continue;
            }

            if !comment.is_empty() && bytes[pos..].starts_with(comment) {
                sink.emit(TokenCategory::Comment, pos, bytes.len());
                return sink.finish();
            }

            if self.spec.is_quote(ch) {
                // An unterminated string stays pending and is flushed as plain.
                sink.flush_plain(pos);
                open_string = Some((ch, pos));
                pos += 1;
                continue;
            }

            if is_word_start(ch) {
                let mut end = pos + 1;
                while end < bytes.len() && is_word_continue(bytes[end]) {
                    end += 1;
                }
                if let Some(category) = self.classify_word(line, pos, end) {
                    sink.emit(category, pos, end);
                }
                pos = end;
                continue;
            }

            if ch.is_ascii_digit() {
                let mut end = pos + 1;
                while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
                    end += 1;
                }
                sink.emit(TokenCategory::Number, pos, end);
                pos = end;
                continue;
            }

            if is_operator_byte(ch) {
                let end = if pos + 2 <= bytes.len()
                    && self.spec.is_compound_operator(&bytes[pos..pos + 2])
                {
                    pos + 2
                } else {
                    pos + 1
                };
                sink.emit(TokenCategory::Operator, pos, end);
                pos = end;
                continue;
            }

            pos += 1;
        }

        sink.finish()
    }
}

// ---------------------------------------------------------------------------
// PlainTokenizer (fallback)
// ---------------------------------------------------------------------------

/// Fallback for languages without a scanner: one plain token per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTokenizer;

impl LineTokenizer for PlainTokenizer {
    fn name(&self) -> &'static str {
        "Plain"
    }

    fn tokenize_line<'a>(&self, line: &'a str, line_index: usize) -> Vec<Token<'a>> {
        if line.is_empty() {
            return Vec::new();
        }
        vec![Token {
            category: TokenCategory::Plain,
            text: line,
            offset: 0,
            line_index,
            ordinal: 0,
        }]
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

static SCRIPT_TOKENIZERS: [ScriptTokenizer; 2] = [
    ScriptTokenizer::new(&TYPESCRIPT),
    ScriptTokenizer::new(&JAVASCRIPT),
];
static PLAIN_TOKENIZER: PlainTokenizer = PlainTokenizer;

/// Tokenizer for a language tag; unknown tags get [`PlainTokenizer`].
#[must_use]
pub fn tokenizer_for(language: &str) -> &'static dyn LineTokenizer {
    match SCRIPT_TOKENIZERS
        .iter()
        .find(|tokenizer| tokenizer.spec.tag == language)
    {
        Some(tokenizer) => tokenizer,
        None => &PLAIN_TOKENIZER,
    }
}

/// Tokenize a single line. Never fails.
#[must_use]
pub fn tokenize_line<'a>(line: &'a str, language: &str) -> Vec<Token<'a>> {
    tokenize_line_at(line, language, 0)
}

/// Tokenize a single line that sits at `line_index` in its document.
#[must_use]
pub fn tokenize_line_at<'a>(line: &'a str, language: &str, line_index: usize) -> Vec<Token<'a>> {
    tokenizer_for(language).tokenize_line(line, line_index)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check that `tokens` partition `line` exactly: non-empty, contiguous,
/// in order, numbered by ordinal, and covering every byte.
#[must_use]
pub fn validate_tokens(line: &str, tokens: &[Token<'_>]) -> bool {
    let mut expected = 0;
    for (ordinal, token) in tokens.iter().enumerate() {
        if token.is_empty() || token.offset != expected || token.ordinal != ordinal {
            return false;
        }
        if line.get(token.range()) != Some(token.text) {
            return false;
        }
        expected = token.range().end;
    }
    expected == line.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use TokenCategory::{Comment, Function, Keyword, Number, Operator, Plain, String, Type};

    fn scan<'a>(line: &'a str, language: &str) -> Vec<(TokenCategory, &'a str)> {
        let tokens = tokenize_line(line, language);
        assert!(validate_tokens(line, &tokens), "invalid partition of {line:?}");
        tokens.iter().map(|t| (t.category, t.text)).collect()
    }

    fn ts(line: &str) -> Vec<(TokenCategory, &str)> {
        scan(line, "typescript")
    }

    // -- Words --------------------------------------------------------------

    #[test]
    fn keyword_before_paren_is_keyword() {
        assert_eq!(ts("if (x) {"), vec![(Keyword, "if"), (Plain, " (x) {")]);
    }

    #[test]
    fn function_heuristic_skips_spaces() {
        assert_eq!(
            scan("doSomething (x)", "javascript"),
            vec![(Function, "doSomething"), (Plain, " (x)")]
        );
    }

    #[test]
    fn function_heuristic_does_not_skip_tabs() {
        assert_eq!(ts("call\t()"), vec![(Plain, "call\t()")]);
    }

    #[test]
    fn capitalized_word_is_type() {
        assert_eq!(
            ts("let x: MyType = y;"),
            vec![
                (Keyword, "let"),
                (Plain, " x"),
                (Operator, ":"),
                (Plain, " "),
                (Type, "MyType"),
                (Plain, " "),
                (Operator, "="),
                (Plain, " y;"),
            ]
        );
    }

    #[test]
    fn capitalized_call_is_type_not_function() {
        assert_eq!(ts("Foo()"), vec![(Type, "Foo"), (Plain, "()")]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(ts("Return"), vec![(Type, "Return")]);
        assert_eq!(ts("returns"), vec![(Plain, "returns")]);
    }

    #[test]
    fn dollar_and_underscore_words() {
        assert_eq!(ts("$el _x"), vec![(Plain, "$el _x")]);
        assert_eq!(ts("$(sel)"), vec![(Function, "$"), (Plain, "(sel)")]);
    }

    #[test]
    fn digits_inside_word_stay_in_word() {
        assert_eq!(
            ts("v8 = 2"),
            vec![(Plain, "v8 "), (Operator, "="), (Plain, " "), (Number, "2")]
        );
    }

    // -- Comments -----------------------------------------------------------

    #[test]
    fn trailing_comment_ends_line() {
        assert_eq!(
            scan("const x = 1; // trailing note", "javascript"),
            vec![
                (Keyword, "const"),
                (Plain, " x "),
                (Operator, "="),
                (Plain, " "),
                (Number, "1"),
                (Plain, "; "),
                (Comment, "// trailing note"),
            ]
        );
    }

    #[test]
    fn comment_swallows_strings_and_code() {
        assert_eq!(ts("// if \"x\" 1"), vec![(Comment, "// if \"x\" 1")]);
    }

    #[test]
    fn block_comment_is_not_a_comment() {
        assert_eq!(
            ts("/* note */"),
            vec![
                (Operator, "/"),
                (Operator, "*"),
                (Plain, " note "),
                (Operator, "*"),
                (Operator, "/"),
            ]
        );
    }

    // -- Strings ------------------------------------------------------------

    #[test]
    fn string_spans_include_quotes() {
        assert_eq!(
            ts("import x from 'react';"),
            vec![
                (Keyword, "import"),
                (Plain, " x "),
                (Keyword, "from"),
                (Plain, " "),
                (String, "'react'"),
                (Plain, ";"),
            ]
        );
    }

    #[test]
    fn comment_marker_inside_string_is_string() {
        assert_eq!(
            ts("\"http://x\" // c"),
            vec![(String, "\"http://x\""), (Plain, " "), (Comment, "// c")]
        );
    }

    #[test]
    fn other_quote_kinds_do_not_close() {
        assert_eq!(ts("`it's \"ok\"`"), vec![(String, "`it's \"ok\"`")]);
    }

    #[test]
    fn escaped_quote_does_not_close() {
        assert_eq!(ts(r#""a\"b""#), vec![(String, r#""a\"b""#)]);
    }

    #[test]
    fn escaped_backslash_before_quote_keeps_string_open() {
        // `"a\\"` is a complete literal, but the lookbehind only sees one `\`.
        assert_eq!(ts(r#""a\\" + 1"#), vec![(Plain, r#""a\\" + 1"#)]);
    }

    #[test]
    fn empty_string_literal() {
        assert_eq!(ts("''"), vec![(String, "''")]);
    }

    #[test]
    fn unterminated_string_is_plain() {
        assert_eq!(
            ts("x = 'open"),
            vec![(Plain, "x "), (Operator, "="), (Plain, " "), (Plain, "'open")]
        );
    }

    // -- Numbers and operators ----------------------------------------------

    #[test]
    fn numbers_accept_repeated_dots() {
        assert_eq!(ts("1.2.3"), vec![(Number, "1.2.3")]);
        assert_eq!(ts("42."), vec![(Number, "42.")]);
    }

    #[test]
    fn leading_dot_is_operator() {
        assert_eq!(ts(".5"), vec![(Operator, "."), (Number, "5")]);
    }

    #[test]
    fn compound_operators_are_one_token() {
        assert_eq!(
            scan("a == b", "javascript"),
            vec![(Plain, "a "), (Operator, "=="), (Plain, " b")]
        );
        for op in ["!=", "<=", ">=", "&&", "||"] {
            let line = format!("a{op}b");
            let tokens = tokenize_line(&line, "typescript");
            assert_eq!(tokens[1].category, Operator);
            assert_eq!(tokens[1].text, op);
        }
    }

    #[test]
    fn triple_equals_splits_greedily() {
        assert_eq!(ts("==="), vec![(Operator, "=="), (Operator, "=")]);
    }

    #[test]
    fn arrow_is_two_operators() {
        assert_eq!(ts("=>"), vec![(Operator, "="), (Operator, ">")]);
    }

    // -- Plain handling -----------------------------------------------------

    #[test]
    fn plain_runs_merge() {
        assert_eq!(ts("  foo, bar;"), vec![(Plain, "  foo, bar;")]);
    }

    #[test]
    fn non_ascii_text_stays_plain() {
        assert_eq!(
            ts("é = \"ü\" // ✓"),
            vec![
                (Plain, "é "),
                (Operator, "="),
                (Plain, " "),
                (String, "\"ü\""),
                (Plain, " "),
                (Comment, "// ✓"),
            ]
        );
    }

    #[test]
    fn carriage_return_stays_in_line() {
        assert_eq!(ts("x;\r"), vec![(Plain, "x;\r")]);
    }

    // -- Fallback -----------------------------------------------------------

    #[test]
    fn unknown_language_is_single_plain_token() {
        let line = "div { color: red; }";
        let tokens = tokenize_line(line, "css");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, Plain);
        assert_eq!(tokens[0].text, line);
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize_line("", "typescript").is_empty());
        assert!(tokenize_line("", "css").is_empty());
    }

    #[test]
    fn tokenizer_names() {
        assert_eq!(tokenizer_for("typescript").name(), "TypeScript");
        assert_eq!(tokenizer_for("javascript").name(), "JavaScript");
        assert_eq!(tokenizer_for("python").name(), "Plain");
    }

    // -- Metadata -----------------------------------------------------------

    #[test]
    fn line_index_and_ordinals_are_stamped() {
        let tokens = tokenize_line_at("let a = 1;", "typescript", 4);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.line_index, 4);
            assert_eq!(token.ordinal, i);
        }
    }

    #[test]
    fn validate_rejects_gaps() {
        let line = "ab";
        let tokens = vec![Token {
            category: Plain,
            text: "a",
            offset: 0,
            line_index: 0,
            ordinal: 0,
        }];
        assert!(!validate_tokens(line, &tokens));
        assert!(validate_tokens("", &[]));
    }

    #[test]
    fn tokenizers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScriptTokenizer>();
        assert_send_sync::<PlainTokenizer>();
    }
}
