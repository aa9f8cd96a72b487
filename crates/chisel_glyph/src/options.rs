//! Format options for chisel_glyph.
//!
//! These options use Prettier's names so an existing `.prettierrc` section
//! can be pasted into `chisel.config.json`.

use serde::{Deserialize, Serialize};

/// Formatting options for JS/TS/JSX code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Number of spaces per indentation level (default: 2)
    #[serde(default = "default_tab_width")]
    pub tab_width: u8,

    /// Use tabs instead of spaces (default: false)
    #[serde(default)]
    pub use_tabs: bool,

    /// Print semicolons at the ends of statements (default: true)
    #[serde(default = "default_true")]
    pub semi: bool,

    /// Use single quotes instead of double quotes (default: false)
    #[serde(default)]
    pub single_quote: bool,

    /// Print trailing commas wherever possible (default: All)
    #[serde(default)]
    pub trailing_comma: TrailingComma,

    /// Print spaces between brackets in object literals (default: true)
    #[serde(default = "default_true")]
    pub bracket_spacing: bool,

    /// End of line style (default: Lf)
    #[serde(default)]
    pub end_of_line: EndOfLine,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            use_tabs: false,
            semi: true,
            single_quote: false,
            trailing_comma: TrailingComma::default(),
            bracket_spacing: true,
            end_of_line: EndOfLine::default(),
        }
    }
}

fn default_tab_width() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

/// Trailing comma options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// No trailing commas
    None,
    /// Trailing commas where valid in ES5 (objects, arrays, etc.)
    Es5,
    /// Trailing commas wherever possible
    #[default]
    All,
}

impl TrailingComma {
    /// Check if multi-line literals and import/export lists get a trailing comma.
    ///
    /// `Es5` and `All` only differ for parameter and argument lists, which
    /// are always printed on a single line.
    #[inline]
    pub fn is_enabled(self) -> bool {
        !matches!(self, TrailingComma::None)
    }
}

/// End of line options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    /// Line Feed only (\n)
    #[default]
    Lf,
    /// Carriage Return + Line Feed (\r\n)
    Crlf,
}

impl FormatOptions {
    /// Style used for code extracted into a new component.
    ///
    /// Generated JSX always closes an opening element on its attribute
    /// line, so `bracketSameLine` needs no option of its own. Matches the
    /// Prettier configuration
    /// `{ bracketSpacing: false, bracketSameLine: true, singleQuote: true, trailingComma: "all" }`.
    #[inline]
    pub fn extraction() -> Self {
        Self {
            bracket_spacing: false,
            single_quote: true,
            trailing_comma: TrailingComma::All,
            ..Default::default()
        }
    }

    /// Get the indent string based on options
    #[inline]
    pub fn indent_string(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width as usize)
        }
    }

    /// Get the newline as bytes (more efficient for byte operations)
    #[inline]
    pub fn newline_bytes(&self) -> &'static [u8] {
        match self.end_of_line {
            EndOfLine::Lf => b"\n",
            EndOfLine::Crlf => b"\r\n",
        }
    }
}
