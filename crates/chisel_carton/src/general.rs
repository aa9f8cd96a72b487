//! Line and URI helpers shared by the analysis and formatting crates.

/// Direction used by [`leading_spaces`] when looking for a markup line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadingSpaces {
    /// Scan from the last line towards the first
    pub end_to_start: bool,
}

impl LeadingSpaces {
    /// Scan from the first line downwards
    pub const FORWARD: Self = Self {
        end_to_start: false,
    };

    /// Scan from the last line upwards
    pub const BACKWARD: Self = Self { end_to_start: true };
}

/// Count the leading whitespace of the first markup line in `code`.
///
/// Scanning forward, a markup line is one whose first non-blank character
/// is `<`. Scanning backward, closing shapes count as well (`<`, `|`, `/`
/// or `>`). Returns 0 when no line matches.
pub fn leading_spaces(code: &str, options: LeadingSpaces) -> usize {
    let is_markup_line = |line: &str| {
        let content = line.trim_start();
        match content.chars().next() {
            Some(first) if options.end_to_start => matches!(first, '<' | '|' | '/' | '>'),
            Some(first) => first == '<',
            None => false,
        }
    };

    let found = if options.end_to_start {
        code.split('\n').rev().find(|line| is_markup_line(line))
    } else {
        code.split('\n').find(|line| is_markup_line(line))
    };

    found
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .unwrap_or(0)
}

/// Get the file extension of a URL-like string.
///
/// Query (`?`) and fragment (`#`) suffixes are ignored. A string without a
/// dot is returned whole, trimmed.
pub fn uri_extension(url: &str) -> &str {
    let path = url.split(['#', '?']).next().unwrap_or_default();
    path.rsplit('.').next().unwrap_or_default().trim()
}
