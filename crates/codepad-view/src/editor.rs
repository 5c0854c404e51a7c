#![forbid(unsafe_code)]

//! Editor view: styled, numbered lines built from tokenizer output.

use codepad_style::{HighlightTheme, Style};
use codepad_syntax::{TokenCategory, TokenizedDocument};

use crate::config::ViewConfig;

/// A token with the style the theme assigns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan<'a> {
    pub text: &'a str,
    pub category: TokenCategory,
    pub style: Style,
    /// Token ordinal within its line; a stable key for incremental renderers.
    pub ordinal: usize,
}

/// One rendered document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    /// 1-based line number shown in the gutter.
    pub number: usize,
    pub spans: Vec<StyledSpan<'a>>,
    /// Whether the caret marker follows this line.
    pub caret: bool,
}

impl RenderedLine<'_> {
    /// The line's source text.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text).collect()
    }
}

/// Output of [`EditorView::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument<'a> {
    pub language: String,
    pub lines: Vec<RenderedLine<'a>>,
    /// Width in columns of the widest line number.
    pub gutter_width: usize,
    pub gutter_style: Style,
    pub line_numbers: bool,
}

impl RenderedDocument<'_> {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the line carrying the caret, if the caret is shown.
    #[must_use]
    pub fn caret_line(&self) -> Option<usize> {
        self.lines.iter().position(|line| line.caret)
    }

    /// Reassemble the source text. Always equal to the rendered input.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(RenderedLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Turns document text into themed lines.
#[derive(Debug, Clone)]
pub struct EditorView {
    theme: HighlightTheme,
    config: ViewConfig,
}

impl Default for EditorView {
    fn default() -> Self {
        Self::from_config(ViewConfig::default())
    }
}

impl EditorView {
    #[must_use]
    pub fn new(theme: HighlightTheme, config: ViewConfig) -> Self {
        Self { theme, config }
    }

    /// Build a view using the theme named in `config`, with its background
    /// override applied.
    #[must_use]
    pub fn from_config(config: ViewConfig) -> Self {
        let mut theme = HighlightTheme::named(config.theme);
        if let Some(background) = config.background {
            theme.background = background;
        }
        Self::new(theme, config)
    }

    #[must_use]
    pub fn theme(&self) -> &HighlightTheme {
        &self.theme
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Render `text` with the configured default language.
    #[must_use]
    pub fn render_default<'a>(&self, text: &'a str) -> RenderedDocument<'a> {
        self.render(text, &self.config.default_language)
    }

    /// Tokenize and style every line of `text`.
    ///
    /// Unknown languages still render, one plain span per non-empty line.
    #[must_use]
    pub fn render<'a>(&self, text: &'a str, language: &str) -> RenderedDocument<'a> {
        let document = TokenizedDocument::new(text, language);
        let last = document.line_count().saturating_sub(1);

        let lines: Vec<RenderedLine<'a>> = document
            .lines()
            .iter()
            .map(|line| RenderedLine {
                number: line.index + 1,
                spans: line
                    .tokens
                    .iter()
                    .map(|token| StyledSpan {
                        text: token.text,
                        category: token.category,
                        style: self.theme.style_for(token.category),
                        ordinal: token.ordinal,
                    })
                    .collect(),
                caret: self.config.caret && line.index == last,
            })
            .collect();

        tracing::debug!(
            language,
            lines = lines.len(),
            tokens = document.tokens().count(),
            classified = document.is_classified(),
            "rendered editor document"
        );

        RenderedDocument {
            language: language.to_owned(),
            gutter_width: lines.len().to_string().len(),
            lines,
            gutter_style: self.theme.gutter,
            line_numbers: self.config.line_numbers,
        }
    }
}
