#![forbid(unsafe_code)]

//! Minimap: one colored block per document line.
//!
//! The minimap ignores intra-line detail. Each line gets a single
//! [`LineCategory`] from a substring scan of its raw text, and the category
//! picks the block color.

use codepad_style::{Rgb, Rgba};
use codepad_syntax::split_lines;

use crate::config::ViewConfig;

/// Coarse per-line classification, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCategory {
    /// `function`, `const`, `let`, `var`
    Declaration,
    /// `class`, `interface`, `type`
    TypeDefinition,
    /// `if`, `for`, `while`, `switch`
    ControlFlow,
    /// `import`, `export`
    Module,
    Return,
    /// Line starting with `//`, `/*` or `*`.
    Comment,
    #[default]
    None,
}

const DECLARATION_WORDS: &[&str] = &["function", "const", "let", "var"];
const TYPE_WORDS: &[&str] = &["class", "interface", "type"];
const CONTROL_WORDS: &[&str] = &["if", "for", "while", "switch"];
const MODULE_WORDS: &[&str] = &["import", "export"];
const RETURN_WORDS: &[&str] = &["return"];

const WORD_RULES: &[(&[&str], LineCategory)] = &[
    (DECLARATION_WORDS, LineCategory::Declaration),
    (TYPE_WORDS, LineCategory::TypeDefinition),
    (CONTROL_WORDS, LineCategory::ControlFlow),
    (MODULE_WORDS, LineCategory::Module),
    (RETURN_WORDS, LineCategory::Return),
];

/// Classify one line of source text.
///
/// Words match as plain substrings anywhere in the line, strings and
/// comments included: `typeof` counts as `type` and `// const` as `const`.
#[must_use]
pub fn classify_line(line: &str) -> LineCategory {
    for (words, category) in WORD_RULES {
        if words.iter().any(|word| line.contains(word)) {
            return *category;
        }
    }

    let trimmed = line.trim();
    if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        return LineCategory::Comment;
    }
    LineCategory::None
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Translucent block fills per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapPalette {
    pub declaration: Rgba,
    pub type_definition: Rgba,
    pub control_flow: Rgba,
    pub module: Rgba,
    pub return_: Rgba,
    pub comment: Rgba,
    pub none: Rgba,
    /// Fill for rows inside the editor's visible range.
    pub visible: Rgba,
}

impl Default for MinimapPalette {
    fn default() -> Self {
        Self {
            declaration: Rgb::new(147, 197, 253).with_opacity(20),
            type_definition: Rgb::new(216, 180, 254).with_opacity(20),
            control_flow: Rgb::new(253, 224, 71).with_opacity(20),
            module: Rgb::new(134, 239, 172).with_opacity(20),
            return_: Rgb::new(252, 165, 165).with_opacity(20),
            comment: Rgb::new(209, 213, 219).with_opacity(20),
            none: Rgba::TRANSPARENT,
            visible: Rgb::new(59, 130, 246).with_opacity(30),
        }
    }
}

impl MinimapPalette {
    #[must_use]
    pub fn fill_for(&self, category: LineCategory) -> Rgba {
        match category {
            LineCategory::Declaration => self.declaration,
            LineCategory::TypeDefinition => self.type_definition,
            LineCategory::ControlFlow => self.control_flow,
            LineCategory::Module => self.module,
            LineCategory::Return => self.return_,
            LineCategory::Comment => self.comment,
            LineCategory::None => self.none,
        }
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Inclusive range of line indices currently visible in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn contains(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }

    /// Number of lines covered (0 for an inverted range).
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Viewport overlay position, in percent of the minimap height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Indicator {
    pub top_pct: f64,
    pub height_pct: f64,
}

/// One minimap block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapRow {
    pub line_index: usize,
    pub category: LineCategory,
    pub fill: Rgba,
    /// Inside the editor's visible range.
    pub visible: bool,
}

impl MinimapRow {
    /// Fill to draw: the visible-range highlight wins over the category.
    #[must_use]
    pub fn effective_fill(&self, palette: &MinimapPalette) -> Rgba {
        if self.visible { palette.visible } else { self.fill }
    }
}

// ---------------------------------------------------------------------------
// Minimap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimap {
    palette: MinimapPalette,
    row_height: usize,
}

impl Default for Minimap {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl Minimap {
    #[must_use]
    pub fn new(palette: MinimapPalette, row_height: usize) -> Self {
        Self {
            palette,
            row_height: row_height.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(MinimapPalette::default(), config.minimap_row_height)
    }

    #[must_use]
    pub fn palette(&self) -> &MinimapPalette {
        &self.palette
    }

    #[must_use]
    pub fn row_height(&self) -> usize {
        self.row_height
    }

    /// Total pixel height of the minimap content.
    #[must_use]
    pub fn content_height(&self, line_count: usize) -> usize {
        line_count * self.row_height
    }

    /// Classify every line of `text` and mark the visible ones.
    ///
    /// Classification does not depend on `language`; it is only logged.
    #[must_use]
    pub fn rows(&self, text: &str, language: &str, visible: VisibleRange) -> Vec<MinimapRow> {
        let rows: Vec<MinimapRow> = split_lines(text)
            .enumerate()
            .map(|(index, line)| {
                let category = classify_line(line);
                MinimapRow {
                    line_index: index,
                    category,
                    fill: self.palette.fill_for(category),
                    visible: visible.contains(index),
                }
            })
            .collect();
        tracing::debug!(
            language,
            lines = rows.len(),
            visible_start = visible.start,
            visible_end = visible.end,
            "computed minimap rows"
        );
        rows
    }

    /// Line under a click at `relative_y` pixels from the top of a minimap
    /// `height` pixels tall, clamped to the document.
    #[must_use]
    pub fn line_at(relative_y: f64, height: f64, line_count: usize) -> usize {
        if line_count == 0 || height <= 0.0 {
            return 0;
        }
        let ratio = relative_y / height;
        if !ratio.is_finite() || ratio <= 0.0 {
            return 0;
        }
        let line = (ratio * line_count as f64).floor() as usize;
        line.min(line_count - 1)
    }

    /// Scroll offset that aligns the minimap with the editor's first visible line.
    #[must_use]
    pub fn scroll_offset(visible: VisibleRange, content_height: f64, line_count: usize) -> f64 {
        if line_count == 0 {
            return 0.0;
        }
        visible.start as f64 * (content_height / line_count as f64)
    }

    /// Position of the viewport overlay.
    #[must_use]
    pub fn indicator(visible: VisibleRange, line_count: usize) -> Indicator {
        if line_count == 0 {
            return Indicator::default();
        }
        let n = line_count as f64;
        Indicator {
            top_pct: visible.start as f64 / n * 100.0,
            height_pct: visible.len() as f64 / n * 100.0,
        }
    }
}
