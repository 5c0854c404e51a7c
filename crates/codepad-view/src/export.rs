#![forbid(unsafe_code)]

//! Export adapters for rendered editor documents.
//!
//! - [`HtmlExporter`]: `<div class="editor-line">` rows of class-tagged
//!   `<span>`s (optionally with inline CSS), gutter and caret included.
//! - [`AnsiExporter`]: terminal text with 24-bit SGR colors.
//!
//! Both also render minimap rows as solid color blocks.

use std::fmt::Write;

use codepad_style::{HighlightTheme, Style};

use crate::config::ViewConfig;
use crate::editor::RenderedDocument;
use crate::minimap::{Minimap, MinimapRow};

// ---------------------------------------------------------------------------
// HTML Exporter
// ---------------------------------------------------------------------------

/// Configuration for HTML export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlExporter {
    /// Token classes are `{class_prefix}-{category}`; plain spans get none.
    pub class_prefix: String,
    /// Add `style="..."` attributes from the span styles.
    pub inline_styles: bool,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self {
            class_prefix: "line".into(),
            inline_styles: false,
        }
    }
}

impl HtmlExporter {
    #[must_use]
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            class_prefix: config.class_prefix.clone(),
            ..Self::default()
        }
    }

    /// Export a rendered document, one `<div>` per line joined by `\n`.
    #[must_use]
    pub fn export(&self, doc: &RenderedDocument<'_>) -> String {
        let mut out = String::new();
        for (i, line) in doc.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("<div class=\"editor-line\">");
            if doc.line_numbers {
                let _ = write!(
                    out,
                    "<span class=\"editor-line-number\">{}</span>",
                    line.number
                );
            }
            for span in &line.spans {
                out.push_str("<span");
                if span.category.is_highlighted() {
                    let _ = write!(out, " class=\"{}-{}\"", self.class_prefix, span.category);
                }
                if self.inline_styles && !span.style.is_empty() {
                    let _ = write!(out, " style=\"{}\"", span.style.to_css());
                }
                out.push('>');
                html_escape_into(&mut out, span.text);
                out.push_str("</span>");
            }
            if line.caret {
                out.push_str("<span class=\"cursor\"></span>");
            }
            out.push_str("</div>");
        }
        out
    }

    /// Export minimap rows as `<div class="minimap-row">` blocks.
    ///
    /// Transparent rows get no background; visible rows use the highlight fill.
    #[must_use]
    pub fn export_minimap(&self, minimap: &Minimap, rows: &[MinimapRow]) -> String {
        let mut out = String::new();
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(
                out,
                "<div class=\"minimap-row\" style=\"height:{}px",
                minimap.row_height()
            );
            let fill = row.effective_fill(minimap.palette());
            if !fill.is_transparent() {
                let _ = write!(out, ";background-color:{}", fill.to_css());
            }
            out.push_str("\"></div>");
        }
        out
    }
}

// ---------------------------------------------------------------------------
// ANSI Exporter
// ---------------------------------------------------------------------------

const SGR_RESET: &str = "\x1b[0m";
const CARET: &str = "\x1b[7m \x1b[0m";
const MINIMAP_BLOCK: &str = "  ";

/// Terminal exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnsiExporter;

impl AnsiExporter {
    #[must_use]
    pub fn export(&self, doc: &RenderedDocument<'_>) -> String {
        let mut out = String::new();
        for (i, line) in doc.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if doc.line_numbers {
                let gutter = format!("{:>width$} ", line.number, width = doc.gutter_width);
                write_styled(&mut out, &gutter, doc.gutter_style);
            }
            for span in &line.spans {
                write_styled(&mut out, span.text, span.style);
            }
            if line.caret {
                out.push_str(CARET);
            }
        }
        out
    }

    /// Export minimap rows as two-column blocks, each fill blended onto the
    /// theme background.
    #[must_use]
    pub fn export_minimap(
        &self,
        minimap: &Minimap,
        rows: &[MinimapRow],
        theme: &HighlightTheme,
    ) -> String {
        let mut out = String::new();
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let fill = row.effective_fill(minimap.palette()).over(theme.background);
            write_styled(&mut out, MINIMAP_BLOCK, Style::new().bg(fill));
        }
        out
    }
}

fn write_styled(out: &mut String, text: &str, style: Style) {
    if style.is_empty() {
        out.push_str(text);
        return;
    }
    style.write_ansi(out);
    out.push_str(text);
    out.push_str(SGR_RESET);
}

/// HTML-escape a string into the output buffer.
fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
