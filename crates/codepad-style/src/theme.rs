#![forbid(unsafe_code)]

use std::fmt;

use codepad_syntax::TokenCategory;

use crate::color::Rgb;
use crate::style::Style;

/// Built-in theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    /// Parse a theme name (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme that maps token categories to styles.
///
/// # Example
/// ```
/// use codepad_style::HighlightTheme;
/// use codepad_syntax::tokenize_line;
///
/// let theme = HighlightTheme::dark();
/// for token in tokenize_line("let x = 42;", "typescript") {
///     let _style = theme.style_for(token.category);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightTheme {
    pub plain: Style,
    pub keyword: Style,
    pub type_name: Style,
    pub function: Style,
    pub string: Style,
    pub comment: Style,
    pub number: Style,
    pub operator: Style,
    /// Editor background, used when blending translucent fills.
    pub background: Rgb,
    /// Style of the line-number gutter.
    pub gutter: Style,
}

impl HighlightTheme {
    /// Create a theme with all empty styles on a black background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    #[must_use]
    pub fn style_for(&self, category: TokenCategory) -> Style {
        match category {
            TokenCategory::Plain => self.plain,
            TokenCategory::Keyword => self.keyword,
            TokenCategory::Type => self.type_name,
            TokenCategory::Function => self.function,
            TokenCategory::String => self.string,
            TokenCategory::Comment => self.comment,
            TokenCategory::Number => self.number,
            TokenCategory::Operator => self.operator,
        }
    }

    /// Colors chosen for readability on dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        let purple = Rgb::new(198, 120, 221); // keywords
        let blue = Rgb::new(97, 175, 239); // functions
        let yellow = Rgb::new(229, 192, 123); // types
        let green = Rgb::new(152, 195, 121); // strings
        let gray = Rgb::new(92, 99, 112); // comments, gutter
        let orange = Rgb::new(209, 154, 102); // numbers
        let cyan = Rgb::new(86, 182, 194); // operators

        Self {
            plain: Style::new(),
            keyword: Style::new().fg(purple).bold(),
            type_name: Style::new().fg(yellow),
            function: Style::new().fg(blue),
            string: Style::new().fg(green),
            comment: Style::new().fg(gray).italic(),
            number: Style::new().fg(orange),
            operator: Style::new().fg(cyan),
            background: Rgb::new(30, 30, 30),
            gutter: Style::new().fg(gray),
        }
    }

    /// Colors chosen for readability on light backgrounds.
    #[must_use]
    pub fn light() -> Self {
        let purple = Rgb::new(136, 57, 169);
        let blue = Rgb::new(0, 92, 197);
        let yellow = Rgb::new(133, 100, 4);
        let green = Rgb::new(80, 120, 60);
        let gray = Rgb::new(95, 99, 104);
        let orange = Rgb::new(152, 104, 1);
        let cyan = Rgb::new(0, 128, 128);

        Self {
            plain: Style::new(),
            keyword: Style::new().fg(purple).bold(),
            type_name: Style::new().fg(yellow),
            function: Style::new().fg(blue),
            string: Style::new().fg(green),
            comment: Style::new().fg(gray).italic(),
            number: Style::new().fg(orange),
            operator: Style::new().fg(cyan),
            background: Rgb::new(255, 255, 255),
            gutter: Style::new().fg(gray),
        }
    }

    pub fn builder() -> HighlightThemeBuilder {
        HighlightThemeBuilder::new()
    }
}

/// Builder for custom highlight themes.
#[derive(Debug, Clone, Default)]
pub struct HighlightThemeBuilder {
    theme: HighlightTheme,
}

impl HighlightThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing theme.
    pub fn from_theme(theme: HighlightTheme) -> Self {
        Self { theme }
    }

    /// Set the style for one category.
    pub fn category(mut self, category: TokenCategory, style: Style) -> Self {
        let slot = match category {
            TokenCategory::Plain => &mut self.theme.plain,
            TokenCategory::Keyword => &mut self.theme.keyword,
            TokenCategory::Type => &mut self.theme.type_name,
            TokenCategory::Function => &mut self.theme.function,
            TokenCategory::String => &mut self.theme.string,
            TokenCategory::Comment => &mut self.theme.comment,
            TokenCategory::Number => &mut self.theme.number,
            TokenCategory::Operator => &mut self.theme.operator,
        };
        *slot = style;
        self
    }

    pub fn keyword(self, style: Style) -> Self {
        self.category(TokenCategory::Keyword, style)
    }

    pub fn string(self, style: Style) -> Self {
        self.category(TokenCategory::String, style)
    }

    pub fn comment(self, style: Style) -> Self {
        self.category(TokenCategory::Comment, style)
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.theme.background = color;
        self
    }

    pub fn gutter(mut self, style: Style) -> Self {
        self.theme.gutter = style;
        self
    }

    pub fn build(self) -> HighlightTheme {
        self.theme
    }
}
