//! Scope analysis rules.
//!
//! These rules follow the core ESLint rules of the same name under their
//! default options. `no-unused-vars` also counts JSX as a use of `React`,
//! as `react/jsx-uses-react` does.

mod no_undef;
mod no_unused_vars;

pub use no_undef::NoUndef;
pub use no_unused_vars::NoUnusedVars;
