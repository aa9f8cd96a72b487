//! Regex approximation of undefined references.
//!
//! Used only when the fragment cannot be transformed or parsed. Two scans
//! run over the raw fragment text:
//!
//! 1. words right after `{` that are not followed by whitespace, `,` or `(`
//!    and do not start with the style binding name (`{title}`, `{item.name}`);
//! 2. words after `=>` that are not followed by whitespace or `,` and do not
//!    start with `console` or `alert` (`() => onPress()`).
//!
//! The style binding name itself is never reported. An empty style binding
//! excludes nothing from the brace scan, so every word it finds is kept.

use regex::Regex;

/// Words the arrow-body scan never reports
const ARROW_BODY_EXCLUDED: [&str; 2] = ["console", "alert"];

/// Guess the free variables of `fragment`.
///
/// Each scan is deduplicated on its own; arrow-body results follow the
/// brace results. Never fails: a pattern that does not compile yields an
/// empty list.
pub fn heuristic_undefined_refs(fragment: &str, style_binding: &str) -> Vec<String> {
    let (Ok(brace), Ok(arrow)) = (
        Regex::new(r"\{([a-zA-Z]+)\b"),
        Regex::new(r"=>\s*([a-zA-Z]+)\b"),
    ) else {
        return Vec::new();
    };

    let mut names = scan(fragment, &brace, &[' ', '\t', '\n', '\r', ',', '('], |word| {
        style_binding.is_empty() || !word.starts_with(style_binding)
    });
    names.extend(scan(fragment, &arrow, &[' ', '\t', '\n', '\r', ','], |word| {
        word != style_binding
            && !ARROW_BODY_EXCLUDED
                .iter()
                .any(|excluded| word.starts_with(excluded))
    }));
    names
}

/// Collect the first capture of each match whose next char is not in
/// `rejected_next` and that passes `keep`.
fn scan(
    text: &str,
    pattern: &Regex,
    rejected_next: &[char],
    keep: impl Fn(&str) -> bool,
) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for captures in pattern.captures_iter(text) {
        let Some(word) = captures.get(1) else {
            continue;
        };
        let next = text[word.end()..].chars().next();
        if next.is_some_and(|c| c.is_whitespace() || rejected_next.contains(&c)) {
            continue;
        }
        if !keep(word.as_str()) || words.iter().any(|w| w == word.as_str()) {
            continue;
        }
        words.push(word.as_str().to_string());
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brace_scan() {
        let fragment = "<View style={styles.box}><Text>{title}</Text><Text>{item.name}</Text></View>";
        assert_eq!(heuristic_undefined_refs(fragment, "styles"), vec!["title", "item"]);
    }

    #[test]
    fn test_brace_scan_rejects_calls_and_lists() {
        let fragment = "{format(title)} {a, b} { spaced }";
        assert!(heuristic_undefined_refs(fragment, "styles").is_empty());
    }

    #[test]
    fn test_style_binding_is_a_prefix_match() {
        let fragment = "{stylesheet.a} {theme.b}";
        assert_eq!(heuristic_undefined_refs(fragment, "styles"), vec!["theme"]);
    }

    #[test]
    fn test_arrow_scan() {
        let fragment = "onPress={() => onSelect(id)} onLongPress={() => console.log(id)} x={() => alert('a')}";
        assert_eq!(heuristic_undefined_refs(fragment, "styles"), vec!["onSelect"]);
    }

    #[test]
    fn test_scans_are_concatenated_without_cross_dedupe() {
        let fragment = "{handler} {() => handler()}";
        assert_eq!(
            heuristic_undefined_refs(fragment, "styles"),
            vec!["handler", "handler"]
        );
    }

    #[test]
    fn test_style_binding_never_reported() {
        let fragment = "style={() => styles.box}";
        assert!(heuristic_undefined_refs(fragment, "styles").is_empty());
    }

    #[test]
    fn test_words_must_end_at_boundary() {
        assert!(heuristic_undefined_refs("{item2} {snake_case}", "styles").is_empty());
    }

    #[test]
    fn test_malformed_fragment() {
        assert_eq!(
            heuristic_undefined_refs("<View>{label</View", "styles"),
            vec!["label"]
        );
    }

    #[test]
    fn test_empty_style_binding_keeps_brace_words() {
        let fragment = "<Text style={styles.title}>{label}</Text>";
        assert_eq!(heuristic_undefined_refs(fragment, ""), vec!["styles", "label"]);
        assert_eq!(heuristic_undefined_refs(fragment, "styles"), vec!["label"]);
    }
}
