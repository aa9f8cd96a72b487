//! # chisel_glyph
//!
//! Glyph - The letterforms for Chisel.
//! Formatter for JavaScript, TypeScript and JSX snippets.
//!
//! ## Name Origin
//!
//! **Glyph** (/ɡlɪf/) refers to the visual representation of a character -
//! the crafted form that gives meaning to written symbols. `chisel_glyph`
//! gives extracted code a consistent, readable shape.
//!
//! ## Performance
//!
//! - Parsing and printing via OXC's arena-allocated AST
//! - SIMD-accelerated line scanning via `memchr`
//! - Pre-allocated output buffers
//!
//! ## Example
//!
//! ```ignore
//! use chisel_glyph::{format_script, FormatOptions};
//!
//! let result = format_script("import {View} from 'react-native'", &FormatOptions::extraction())?;
//! assert_eq!(result, "import {View} from 'react-native';\n");
//! ```

mod error;
mod fallback;
mod options;
mod script;

pub use error::*;
pub use fallback::*;
pub use options::*;

/// Format script content (JS, TS, JSX or TSX)
///
/// This is the main entry point. Fails when the source does not parse.
#[inline]
pub fn format_script(source: &str, options: &FormatOptions) -> Result<String, FormatError> {
    script::format_script_content(source, options)
}
