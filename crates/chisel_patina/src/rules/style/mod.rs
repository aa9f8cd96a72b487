//! Text-level style rules.
//!
//! Each rule works on the raw source and carries a fix, so the set can
//! normalize whitespace on code that does not parse.

mod eol_last;
mod linebreak_style;
mod no_multiple_empty_lines;
mod no_tabs;
mod no_trailing_spaces;

pub use eol_last::EolLast;
pub use linebreak_style::LinebreakStyle;
pub use no_multiple_empty_lines::NoMultipleEmptyLines;
pub use no_tabs::NoTabs;
pub use no_trailing_spaces::NoTrailingSpaces;

/// Lines of `source` with their start offsets, line breaks excluded.
///
/// A `\r` before the `\n` is excluded too.
pub(crate) fn lines_with_offsets(source: &str) -> impl Iterator<Item = (u32, &str)> {
    let mut offset = 0u32;
    source.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() as u32;
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        (start, line)
    })
}
