#![forbid(unsafe_code)]

//! Static per-language scanning tables.
//!
//! The scan loop in [`crate::tokenizer`] is language-agnostic; everything it
//! needs to know about a language lives in a [`LanguageSpec`]. Adding a
//! language means adding a table here and listing it in
//! [`BUILTIN_LANGUAGES`].

/// Scanning configuration for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Tag callers pass in, matched exactly (case-sensitive).
    pub tag: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    /// Two-character operators emitted as a single token.
    pub compound_operators: &'static [&'static str],
    /// Characters that open (and close) a string literal.
    pub quotes: &'static [u8],
    /// Line comment introducer; empty disables comment detection.
    pub line_comment: &'static str,
}

const SCRIPT_KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "if",
    "else",
    "for",
    "while",
    "import",
    "export",
    "from",
    "default",
    "interface",
    "type",
    "class",
    "extends",
    "implements",
];

const SCRIPT_COMPOUND_OPERATORS: &[&str] = &["==", "!=", "<=", ">=", "&&", "||"];

const SCRIPT_QUOTES: &[u8] = b"\"'`";

pub const TYPESCRIPT: LanguageSpec = LanguageSpec {
    tag: "typescript",
    name: "TypeScript",
    keywords: SCRIPT_KEYWORDS,
    compound_operators: SCRIPT_COMPOUND_OPERATORS,
    quotes: SCRIPT_QUOTES,
    line_comment: "//",
};

pub const JAVASCRIPT: LanguageSpec = LanguageSpec {
    tag: "javascript",
    name: "JavaScript",
    keywords: SCRIPT_KEYWORDS,
    compound_operators: SCRIPT_COMPOUND_OPERATORS,
    quotes: SCRIPT_QUOTES,
    line_comment: "//",
};

/// Languages that receive full classification.
pub const BUILTIN_LANGUAGES: &[&LanguageSpec] = &[&TYPESCRIPT, &JAVASCRIPT];

impl LanguageSpec {
    /// Look up a built-in language by its exact tag.
    #[must_use]
    pub fn for_tag(tag: &str) -> Option<&'static LanguageSpec> {
        BUILTIN_LANGUAGES.iter().copied().find(|spec| spec.tag == tag)
    }

    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word)
    }

    /// Whether `pair` is one of this language's compound operators.
    #[must_use]
    pub fn is_compound_operator(&self, pair: &[u8]) -> bool {
        self.compound_operators
            .iter()
            .any(|op| op.as_bytes() == pair)
    }

    #[must_use]
    pub fn is_quote(&self, byte: u8) -> bool {
        self.quotes.contains(&byte)
    }
}
