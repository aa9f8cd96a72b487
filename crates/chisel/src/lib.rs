//! # Chisel
//!
//! Fragment extraction analysis for JSX and TSX components.
//!
//! Given a fragment selected out of a larger component, chisel answers what
//! a new component built from that fragment needs: which identifiers it
//! reads but does not declare, which bindings it leaves unused, which
//! imports and style entries it carries along, and how the result should be
//! formatted.
//!
//! This crate re-exports the chisel sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Text helpers and known global names
//! - [`patina`] - Rule-based identifier analyzer
//! - [`glyph`] - Formatter for extracted code
//!
//! ## Example
//!
//! ```ignore
//! use chisel::{Extractor, get_stylesheet};
//!
//! let extractor = Extractor::new();
//! let fragment = "<View style={styles.box}><Text>{title}</Text></View>";
//!
//! let props = extractor.undefined_vars(fragment, "styles").into_names();
//! assert_eq!(props, vec!["View", "Text", "title"]);
//!
//! let sheet = get_stylesheet(source, fragment);
//! println!("{}", sheet.snippet);
//! ```

/// Text helpers and known global names.
pub use chisel_carton as carton;

/// Rule-based identifier analyzer.
pub use chisel_patina as patina;

/// Formatter for extracted code.
pub use chisel_glyph as glyph;

pub mod analysis;
#[cfg(feature = "native")]
pub mod autofix;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod imports;
pub mod stylesheet;
pub mod transform;

pub use analysis::{Analysis, Extractor};
#[cfg(feature = "native")]
pub use autofix::{autofix, autofix_or_original};
pub use config::{find_config_file, load_config, parse_config, AnalysisConfig, ChiselConfig, CONFIG_FILE_NAME};
pub use error::{AnalysisFailure, AutofixError, TransformError};
pub use heuristic::heuristic_undefined_refs;
pub use imports::{get_imports, get_used_imports, ImportOptions};
pub use stylesheet::{
    get_stylesheet, locate_stylesheet, referenced_style_keys, resolve_style_object, StyleSheetDecl, Stylesheet,
    DEFAULT_STYLE_BINDING,
};
pub use transform::transform;

pub use chisel_carton::{leading_spaces, uri_extension, LeadingSpaces};
pub use chisel_glyph::{FormatError, FormatOptions, FormatPath, Formatted, TrailingComma};
pub use chisel_patina::{AnalysisError, Linter, RuleConfig, RuleLevel};
