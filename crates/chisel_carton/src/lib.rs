//! Carton - The shared toolbox for Chisel.
//!
//! This crate provides the small utilities every other Chisel crate leans on,
//! much like a carton holds the tools a carver keeps within reach.
//!
//! # Modules
//!
//! - **builtins**: identifiers that are always in scope (JS and host globals)
//! - **general**: line and URI helpers used when re-indenting extracted fragments
//! - **normalize**: whitespace normalization for regex-matched code
//!
//! # Example
//!
//! ```
//! use chisel_carton::{is_known_global, normalize_whitespace, uri_extension};
//!
//! assert!(is_known_global("Math"));
//! assert_eq!(normalize_whitespace("{\n  flex: 1,\n}"), "{ flex: 1 }");
//! assert_eq!(uri_extension("file:///app/Card.tsx?v=2"), "tsx");
//! ```

pub mod builtins;
pub mod general;
pub mod normalize;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps
pub use rustc_hash::FxHashMap;

pub use builtins::*;
pub use general::*;
pub use normalize::*;
