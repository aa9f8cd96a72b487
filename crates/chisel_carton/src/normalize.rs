//! Whitespace normalization for code captured by regular expressions.
//!
//! Regex fallbacks capture object bodies verbatim, including the author's
//! line breaks, indentation and trailing commas. Normalizing them makes the
//! captured text comparable and safe to embed in generated code.

/// Collapse every whitespace run to a single space, drop a trailing comma
/// that directly precedes a closing `}`/`]`, and trim both ends.
///
/// Quoted strings are copied untouched.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.trim().chars();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => {
                quote = Some(c);
                out.push(c);
            }
            c if c.is_whitespace() => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            '}' | ']' => {
                strip_dangling_comma(&mut out);
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Remove a `,` (optionally followed by one space) at the end of `out`.
fn strip_dangling_comma(out: &mut String) {
    let trimmed_len = out.trim_end_matches(' ').len();
    if out[..trimmed_len].ends_with(',') {
        let had_space = trimmed_len < out.len();
        out.truncate(trimmed_len - 1);
        if had_space && !out.ends_with(' ') {
            out.push(' ');
        }
    }
}
