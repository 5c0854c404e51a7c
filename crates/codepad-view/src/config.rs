#![forbid(unsafe_code)]

//! View configuration read from `CODEPAD_*` environment variables.
//!
//! Parsing never fails: a bad value leaves the default in place and is
//! reported in [`ConfigParse::errors`].

use std::env;
use std::fmt;

use codepad_style::{Rgb, ThemeName};

const ENV_THEME: &str = "CODEPAD_THEME";
const ENV_BACKGROUND: &str = "CODEPAD_BACKGROUND";
const ENV_LINE_NUMBERS: &str = "CODEPAD_LINE_NUMBERS";
const ENV_CARET: &str = "CODEPAD_CARET";
const ENV_LANGUAGE: &str = "CODEPAD_LANGUAGE";
const ENV_HTML_CLASS_PREFIX: &str = "CODEPAD_HTML_CLASS_PREFIX";
const ENV_MINIMAP_ROW_HEIGHT: &str = "CODEPAD_MINIMAP_ROW_HEIGHT";

/// Settings shared by the editor view, exporters and minimap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub theme: ThemeName,
    /// Overrides the theme's editor background.
    pub background: Option<Rgb>,
    /// Show the line-number gutter.
    pub line_numbers: bool,
    /// Draw a caret after the last line.
    pub caret: bool,
    /// Language tag used when a caller has none.
    pub default_language: String,
    /// Prefix for token CSS classes (`{prefix}-keyword`, ...).
    pub class_prefix: String,
    /// Minimap row pitch in pixels.
    pub minimap_row_height: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            background: None,
            line_numbers: true,
            caret: true,
            default_language: "typescript".to_owned(),
            class_prefix: "line".to_owned(),
            minimap_row_height: 3,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: ViewConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ViewConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> ViewConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        parse_and_report(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.default_language.trim().is_empty() {
            errors.push(ConfigError::new(
                "default_language",
                self.default_language.clone(),
                "must not be empty",
            ));
        }
        if !is_css_identifier(&self.class_prefix) {
            errors.push(ConfigError::new(
                "class_prefix",
                self.class_prefix.clone(),
                "expected [A-Za-z_][A-Za-z0-9_-]*",
            ));
        }
        if self.minimap_row_height == 0 {
            errors.push(ConfigError::new(
                "minimap_row_height",
                "0",
                "must be positive",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn parse_and_report<F>(get: F) -> ConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let parse = from_env_with(get);
    for error in &parse.errors {
        tracing::warn!(
            field = error.field,
            value = %error.value,
            "ignoring invalid view setting: {}",
            error.message
        );
    }
    parse
}

fn from_env_with<F>(mut get: F) -> ConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = ViewConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_THEME) {
        match ThemeName::parse(&value) {
            Some(parsed) => config.theme = parsed,
            None => errors.push(ConfigError::new("theme", value, "expected dark|light")),
        }
    }

    if let Some(value) = get(ENV_BACKGROUND) {
        match value.parse::<Rgb>() {
            Ok(color) => config.background = Some(color),
            Err(err) => errors.push(ConfigError::new("background", value, err.to_string())),
        }
    }

    if let Some(value) = get(ENV_LINE_NUMBERS) {
        match parse_bool(&value) {
            Some(parsed) => config.line_numbers = parsed,
            None => errors.push(ConfigError::new(
                "line_numbers",
                value,
                BOOL_EXPECTED,
            )),
        }
    }

    if let Some(value) = get(ENV_CARET) {
        match parse_bool(&value) {
            Some(parsed) => config.caret = parsed,
            None => errors.push(ConfigError::new(
                "caret",
                value,
                BOOL_EXPECTED,
            )),
        }
    }

    if let Some(value) = get(ENV_LANGUAGE) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.push(ConfigError::new("default_language", value, "must not be empty"));
        } else {
            config.default_language = trimmed.to_owned();
        }
    }

    if let Some(value) = get(ENV_HTML_CLASS_PREFIX) {
        let trimmed = value.trim();
        if is_css_identifier(trimmed) {
            config.class_prefix = trimmed.to_owned();
        } else {
            errors.push(ConfigError::new(
                "class_prefix",
                value,
                "expected [A-Za-z_][A-Za-z0-9_-]*",
            ));
        }
    }

    if let Some(value) = get(ENV_MINIMAP_ROW_HEIGHT) {
        match parse_usize(&value) {
            Some(parsed) if parsed > 0 => config.minimap_row_height = parsed,
            _ => errors.push(ConfigError::new(
                "minimap_row_height",
                value,
                "expected positive integer",
            )),
        }
    }

    ConfigParse { config, errors }
}

const BOOL_EXPECTED: &str = "expected bool (1/0/true/false/yes/no/on/off)";

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[inline]
fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

fn is_css_identifier(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
