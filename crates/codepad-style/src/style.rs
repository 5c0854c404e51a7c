#![forbid(unsafe_code)]

use std::fmt::Write;

use crate::color::Rgb;

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
    }
}

/// Foreground, background and attributes for a span of text.
///
/// An unset color inherits from whatever the span is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub flags: StyleFlags,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(self) -> Self {
        self.with_flags(StyleFlags::BOLD)
    }

    #[must_use]
    pub const fn dim(self) -> Self {
        self.with_flags(StyleFlags::DIM)
    }

    #[must_use]
    pub const fn italic(self) -> Self {
        self.with_flags(StyleFlags::ITALIC)
    }

    #[must_use]
    pub const fn underline(self) -> Self {
        self.with_flags(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    /// Whether the style changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }

    /// Inline CSS declarations, e.g. `color:#c678dd;font-weight:bold;`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if let Some(fg) = self.fg {
            let _ = write!(out, "color:{fg};");
        }
        if let Some(bg) = self.bg {
            let _ = write!(out, "background-color:{bg};");
        }
        if self.flags.contains(StyleFlags::BOLD) {
            out.push_str("font-weight:bold;");
        }
        if self.flags.contains(StyleFlags::DIM) {
            out.push_str("opacity:0.6;");
        }
        if self.flags.contains(StyleFlags::ITALIC) {
            out.push_str("font-style:italic;");
        }
        if self.flags.contains(StyleFlags::UNDERLINE) {
            out.push_str("text-decoration:underline;");
        }
        out
    }

    /// Append the ANSI SGR sequence that turns this style on.
    ///
    /// Writes nothing for an empty style.
    pub fn write_ansi(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        let mut params: Vec<String> = Vec::with_capacity(6);
        if self.flags.contains(StyleFlags::BOLD) {
            params.push("1".into());
        }
        if self.flags.contains(StyleFlags::DIM) {
            params.push("2".into());
        }
        if self.flags.contains(StyleFlags::ITALIC) {
            params.push("3".into());
        }
        if self.flags.contains(StyleFlags::UNDERLINE) {
            params.push("4".into());
        }
        if let Some(fg) = self.fg {
            params.push(format!("38;2;{};{};{}", fg.r, fg.g, fg.b));
        }
        if let Some(bg) = self.bg {
            params.push(format!("48;2;{};{};{}", bg.r, bg.g, bg.b));
        }
        let _ = write!(out, "\x1b[{}m", params.join(";"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_accumulates_flags() {
        let style = Style::new().bold().italic();
        assert!(style.flags.contains(StyleFlags::BOLD | StyleFlags::ITALIC));
        assert!(!style.flags.contains(StyleFlags::UNDERLINE));
        assert!(!style.is_empty());
        assert!(Style::new().is_empty());
        assert_eq!(Style::default(), Style::new());
    }

    #[test]
    fn css_output() {
        let style = Style::new().fg(Rgb::new(198, 120, 221)).bold();
        assert_eq!(style.to_css(), "color:#c678dd;font-weight:bold;");
        assert_eq!(Style::new().to_css(), "");
    }

    #[test]
    fn ansi_output() {
        let mut out = String::new();
        Style::new().fg(Rgb::new(1, 2, 3)).italic().write_ansi(&mut out);
        assert_eq!(out, "\x1b[3;38;2;1;2;3m");

        let mut empty = String::new();
        Style::new().write_ansi(&mut empty);
        assert!(empty.is_empty());
    }
}
