//! Editor, exporters and minimap driven from the same document.

use codepad_style::{HighlightTheme, ThemeName};
use codepad_syntax::TokenCategory;
use codepad_view::{
    EditorView, HtmlExporter, LineCategory, Minimap, MinimapPalette, ViewConfig, VisibleRange,
};
use pretty_assertions::assert_eq;

const COMPONENT: &str = "\
import React, { useState } from 'react';

interface Props {
  title: string;
}

/**
 * Counter with a label.
 */
export function Counter({ title }: Props) {
  const [count, setCount] = useState(0);
  if (count > 10) {
    return null;
  }
  // render
  return `${title}: ${count}`;
}";

#[test]
fn minimap_categories_for_component() {
    let rows = Minimap::default().rows(COMPONENT, "typescript", VisibleRange::new(0, 5));
    let categories: Vec<LineCategory> = rows.iter().map(|r| r.category).collect();
    use LineCategory::*;
    assert_eq!(
        categories,
        vec![
            Module,
            None,
            TypeDefinition,
            None,
            None,
            None,
            Comment,
            Comment,
            Comment,
            Declaration,
            Declaration,
            ControlFlow,
            Return,
            None,
            Comment,
            Return,
            None,
        ]
    );
    assert_eq!(rows.iter().filter(|r| r.visible).count(), 6);
}

#[test]
fn editor_and_minimap_agree_on_line_count() {
    let view = EditorView::default();
    let doc = view.render(COMPONENT, "typescript");
    let rows = Minimap::default().rows(COMPONENT, "typescript", VisibleRange::new(0, 0));
    assert_eq!(doc.line_count(), rows.len());
    assert_eq!(doc.plain_text(), COMPONENT);
    assert_eq!(doc.gutter_width, 2);
}

#[test]
fn template_literal_is_one_string_span() {
    let doc = EditorView::default().render(COMPONENT, "typescript");
    let line = &doc.lines[15];
    let strings: Vec<&str> = line
        .spans
        .iter()
        .filter(|s| s.category == TokenCategory::String)
        .map(|s| s.text)
        .collect();
    assert_eq!(strings, vec!["`${title}: ${count}`"]);
}

#[test]
fn html_export_has_one_row_per_line_and_a_single_caret() {
    let doc = EditorView::default().render(COMPONENT, "typescript");
    let html = HtmlExporter::default().export(&doc);
    assert_eq!(html.lines().count(), doc.line_count());
    assert_eq!(html.matches("<span class=\"cursor\"></span>").count(), 1);
    assert!(html.ends_with("<span>}</span><span class=\"cursor\"></span></div>"));
    assert!(html.contains("<span class=\"line-keyword\">interface</span>"));
    assert!(html.contains("<span class=\"line-comment\">// render</span>"));
    assert!(html.contains("<span class=\"line-string\">'react'</span>"));
}

#[test]
fn light_theme_from_config() {
    let config = ViewConfig {
        theme: ThemeName::Light,
        ..ViewConfig::default()
    };
    let view = EditorView::from_config(config);
    assert_eq!(view.theme(), &HighlightTheme::light());
}

#[test]
fn click_and_indicator_for_component() {
    let minimap = Minimap::default();
    let lines = COMPONENT.split('\n').count();
    let height = minimap.content_height(lines) as f64;
    assert_eq!(Minimap::line_at(height / 2.0, height, lines), lines / 2);
    let indicator = Minimap::indicator(VisibleRange::new(0, lines - 1), lines);
    assert_eq!(indicator.top_pct, 0.0);
    assert!((indicator.height_pct - 100.0).abs() < 1e-9);
    assert_eq!(minimap.palette(), &MinimapPalette::default());
}
