//! Built-in lint rules.

pub mod react;
pub mod scope;
pub mod style;
