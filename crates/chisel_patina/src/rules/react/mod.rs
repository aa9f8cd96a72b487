//! React-specific lint rules (eslint-plugin-react compatible).

mod jsx_no_undef;

pub use jsx_no_undef::JsxNoUndef;
