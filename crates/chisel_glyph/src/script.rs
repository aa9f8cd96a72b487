//! Script/TypeScript/JSX formatting using oxc_codegen.
//!
//! The code generator prints a canonical layout. A second parse of the
//! generated code locates brace pairs and list ends, so that bracket
//! spacing and trailing commas are applied to real syntax only, never to
//! JSX containers or string contents. Line-level passes then handle
//! indentation and semicolons using byte operations; template literal text
//! is copied through unchanged.

use std::ops::Range;

use crate::error::FormatError;
use crate::options::FormatOptions;
use memchr::{memchr, memmem};
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    ArrayExpression, ArrayExpressionElement, ExportNamedDeclaration, ImportDeclaration,
    ImportDeclarationSpecifier, ObjectExpression, ObjectPattern, TemplateElement,
};
use oxc_ast_visit::{walk, Visit};
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

/// Format JavaScript/TypeScript/JSX content using oxc_codegen
pub(crate) fn format_script_content(
    source: &str,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    // Fast path for empty content
    if source.trim().is_empty() {
        return Ok(String::new());
    }

    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, SourceType::tsx()).parse();

    if parsed.panicked || !parsed.errors.is_empty() {
        let error_messages: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
        return Err(FormatError::ScriptParseError(error_messages.join("; ")));
    }

    let generated = Codegen::new()
        .with_options(convert_to_codegen_options(options))
        .build(&parsed.program)
        .code;

    let edited = apply_syntax_edits(&generated, options)?;

    // Codegen keeps only some leading comments
    let expected = parsed.program.comments.len();
    if edited.comments < expected {
        return Err(FormatError::CommentsDropped {
            expected,
            printed: edited.comments,
        });
    }

    Ok(post_process_script_fast(&edited, options))
}

/// Convert our options to oxc_codegen options
#[inline]
fn convert_to_codegen_options(options: &FormatOptions) -> CodegenOptions {
    CodegenOptions {
        single_quote: options.single_quote,
        minify: false,
        comments: true,
        annotation_comments: true,
        source_map_path: None,
        ..Default::default()
    }
}

/// Generated code after [`apply_syntax_edits`]
struct Edited {
    code: String,
    /// Byte ranges of template literal text in `code`
    templates: Vec<Range<usize>>,
    /// Comments found when reparsing
    comments: usize,
}

/// Edit of the generated code found by [`SyntaxEditCollector`]
struct SyntaxEdit {
    start: u32,
    end: u32,
    text: &'static str,
}

/// Collects bracket spacing and trailing comma edits from generated code
struct SyntaxEditCollector<'s> {
    source: &'s str,
    trailing_comma: bool,
    bracket_spacing: bool,
    edits: Vec<SyntaxEdit>,
    templates: Vec<Span>,
}

impl SyntaxEditCollector<'_> {
    /// Handle a bracket pair at `open`/`close` whose last list item ends at `last_end`.
    ///
    /// `last_end` is `None` when the list cannot take a trailing comma.
    fn bracket_pair(&mut self, open: u32, close: u32, last_end: Option<u32>, braces: bool) {
        let (open_idx, close_idx) = (open as usize, close as usize);
        if open_idx >= close_idx || close_idx > self.source.len() {
            return;
        }
        let inner = &self.source[open_idx + 1..close_idx];

        if memchr(b'\n', inner.as_bytes()).is_some() {
            if self.trailing_comma {
                if let Some(end) = last_end.filter(|&end| end > open && end <= close) {
                    let gap = &self.source[end as usize..close_idx];
                    if gap.trim().is_empty() {
                        self.edits.push(SyntaxEdit {
                            start: end,
                            end,
                            text: ",",
                        });
                    }
                }
            }
            return;
        }

        if braces && !self.bracket_spacing && !inner.trim().is_empty() {
            if inner.starts_with(' ') {
                self.edits.push(SyntaxEdit {
                    start: open + 1,
                    end: open + 2,
                    text: "",
                });
            }
            if inner.ends_with(' ') {
                self.edits.push(SyntaxEdit {
                    start: close - 1,
                    end: close,
                    text: "",
                });
            }
        }
    }

    /// Handle the `{ ... }` list of an import or export declaration
    fn specifier_list(&mut self, span: Span, last_end: u32) {
        let text = &self.source[span.start as usize..span.end as usize];
        let Some(open) = memchr(b'{', text.as_bytes()) else {
            return;
        };
        let tail = &self.source[last_end as usize..span.end as usize];
        let Some(close) = memchr(b'}', tail.as_bytes()) else {
            return;
        };
        self.bracket_pair(
            span.start + open as u32,
            last_end + close as u32,
            Some(last_end),
            true,
        );
    }
}

impl<'a> Visit<'a> for SyntaxEditCollector<'_> {
    fn visit_object_expression(&mut self, obj: &ObjectExpression<'a>) {
        let last_end = obj.properties.last().map(|p| p.span().end);
        self.bracket_pair(obj.span.start, obj.span.end - 1, last_end, true);
        walk::walk_object_expression(self, obj);
    }

    fn visit_object_pattern(&mut self, pat: &ObjectPattern<'a>) {
        // A rest element must stay last, without a trailing comma
        let last_end = match &pat.rest {
            Some(_) => None,
            None => pat.properties.last().map(|p| p.span.end),
        };
        self.bracket_pair(pat.span.start, pat.span.end - 1, last_end, true);
        walk::walk_object_pattern(self, pat);
    }

    fn visit_array_expression(&mut self, arr: &ArrayExpression<'a>) {
        let last_end = match arr.elements.last() {
            Some(ArrayExpressionElement::Elision(_)) | None => None,
            Some(last) => Some(last.span().end),
        };
        self.bracket_pair(arr.span.start, arr.span.end - 1, last_end, false);
        walk::walk_array_expression(self, arr);
    }

    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        if let Some(ImportDeclarationSpecifier::ImportSpecifier(last)) =
            decl.specifiers.as_ref().and_then(|s| s.last())
        {
            self.specifier_list(decl.span, last.span.end);
        }
        walk::walk_import_declaration(self, decl);
    }

    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        if decl.declaration.is_none() {
            if let Some(last) = decl.specifiers.last() {
                self.specifier_list(decl.span, last.span.end);
            }
        }
        walk::walk_export_named_declaration(self, decl);
    }

    fn visit_template_element(&mut self, elem: &TemplateElement<'a>) {
        self.templates.push(elem.span);
    }
}

/// Apply bracket spacing and trailing commas to generated code.
///
/// Also records where template literal text ended up, and how many
/// comments the generated code still carries.
fn apply_syntax_edits(generated: &str, options: &FormatOptions) -> Result<Edited, FormatError> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, generated, SourceType::tsx()).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        let error_messages: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
        return Err(FormatError::ScriptParseError(error_messages.join("; ")));
    }

    let mut collector = SyntaxEditCollector {
        source: generated,
        trailing_comma: options.trailing_comma.is_enabled(),
        bracket_spacing: options.bracket_spacing,
        edits: Vec::new(),
        templates: Vec::new(),
    };
    collector.visit_program(&parsed.program);

    let mut edits = collector.edits;
    edits.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut code = generated.to_string();
    for edit in &edits {
        code.replace_range(edit.start as usize..edit.end as usize, edit.text);
    }

    let templates = collector
        .templates
        .iter()
        .map(|span| shifted(span.start, &edits)..shifted(span.end, &edits))
        .collect();

    Ok(Edited {
        code,
        templates,
        comments: parsed.program.comments.len(),
    })
}

/// Position of `pos` after applying `edits`, none of which overlaps it
fn shifted(pos: u32, edits: &[SyntaxEdit]) -> usize {
    let delta: isize = edits
        .iter()
        .filter(|edit| edit.end <= pos)
        .map(|edit| edit.text.len() as isize - (edit.end - edit.start) as isize)
        .sum();
    (pos as isize + delta) as usize
}

/// Length of the string literal or comment starting at `i`.
///
/// Quoted strings end at the line end, so a stray apostrophe in JSX text
/// does not swallow the rest of the file.
fn literal_len(bytes: &[u8], i: usize) -> Option<usize> {
    let len = bytes.len();
    match bytes[i] {
        quote @ (b'"' | b'\'' | b'`') => {
            let mut j = i + 1;
            while j < len {
                match bytes[j] {
                    b'\\' => j += 2,
                    b'\n' if quote != b'`' => return None,
                    c if c == quote => return Some(j + 1 - i),
                    _ => j += 1,
                }
            }
            None
        }
        b'/' if bytes.get(i + 1) == Some(&b'/') => {
            Some(memchr(b'\n', &bytes[i..]).unwrap_or(len - i))
        }
        b'/' if bytes.get(i + 1) == Some(&b'*') => {
            let end = memmem::find(&bytes[i + 2..], b"*/").map_or(len, |p| i + 2 + p + 2);
            Some(end - i)
        }
        _ => None,
    }
}

/// Post-process the generated code using byte operations
#[inline]
fn post_process_script_fast(edited: &Edited, options: &FormatOptions) -> String {
    let result = reindent_lines(edited.code.as_bytes(), &edited.templates, options);

    // Handle semicolons if semi is false
    let result = if !options.semi {
        remove_optional_semicolons_fast(&result)
    } else {
        result
    };

    let newline = options.newline_bytes();
    let mut final_result = Vec::with_capacity(result.len() + newline.len());
    let mut end = result.len();
    while end > 0 && matches!(result[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    final_result.extend_from_slice(&result[..end]);
    final_result.extend_from_slice(newline);

    // Only ASCII bytes were inserted or removed
    String::from_utf8(final_result)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Rewrite leading tabs of generated code into the configured indent and
/// drop trailing whitespace, one line at a time.
///
/// Line breaks inside `templates` belong to a string value: the text
/// around them is copied as is.
fn reindent_lines(bytes: &[u8], templates: &[Range<usize>], options: &FormatOptions) -> Vec<u8> {
    let len = bytes.len();
    let mut result = Vec::with_capacity(len + len / 4);
    let indent = options.indent_string();
    let newline = options.newline_bytes();
    let in_template = |at: usize| templates.iter().any(|range| range.contains(&at));
    let mut pos = 0;

    while pos < len {
        // Find end of line using memchr (SIMD-accelerated)
        let line_end = memchr(b'\n', &bytes[pos..]).map_or(len, |p| pos + p);
        let starts_in_template = pos > 0 && in_template(pos - 1);
        let ends_in_template = line_end < len && in_template(line_end);

        let mut content_end = line_end;
        if !ends_in_template {
            while content_end > pos && matches!(bytes[content_end - 1], b' ' | b'\t' | b'\r') {
                content_end -= 1;
            }
        }

        if starts_in_template {
            result.extend_from_slice(&bytes[pos..content_end]);
        } else {
            // Codegen indents with one tab per level
            let mut start = pos;
            while start < content_end && bytes[start] == b'\t' {
                start += 1;
            }
            if start < content_end {
                for _ in 0..start - pos {
                    result.extend_from_slice(indent.as_bytes());
                }
                result.extend_from_slice(&bytes[start..content_end]);
            }
        }

        if ends_in_template {
            result.push(b'\n');
        } else {
            result.extend_from_slice(newline);
        }

        pos = line_end + 1;
    }

    result
}

/// Remove semicolons at line ends.
///
/// A semicolon is kept when the next line starts with `(`, `[` or a
/// template literal, which would otherwise continue the statement.
fn remove_optional_semicolons_fast(source: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(source.len());
    let len = source.len();
    let mut i = 0;

    while i < len {
        if let Some(n) = literal_len(source, i) {
            result.extend_from_slice(&source[i..i + n]);
            i += n;
            continue;
        }

        let b = source[i];
        if b == b';' {
            let next_idx = i + 1;
            let at_line_end = next_idx >= len
                || source[next_idx] == b'\n'
                || (source[next_idx] == b'\r' && source.get(next_idx + 1) == Some(&b'\n'));
            if at_line_end && !continues_statement(&source[next_idx..]) {
                i += 1;
                continue;
            }
        }

        result.push(b);
        i += 1;
    }

    result
}

/// Check if the first non-blank byte after `rest` would continue an expression
fn continues_statement(rest: &[u8]) -> bool {
    rest.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| matches!(b, b'(' | b'[' | b'`'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TrailingComma;

    fn format(source: &str, options: &FormatOptions) -> String {
        format_script_content(source, options).unwrap()
    }

    fn edit(generated: &str, options: &FormatOptions) -> String {
        apply_syntax_edits(generated, options).unwrap().code
    }

    #[test]
    fn test_format_simple_script() {
        let result = format("const x=1", &FormatOptions::default());
        assert_eq!(result, "const x = 1;\n");
    }

    #[test]
    fn test_format_with_imports() {
        let result = format("import {View,Text} from 'react-native'", &FormatOptions::default());
        assert!(result.contains("View"));
        assert!(result.contains("Text"));
        assert!(result.contains("react-native"));
    }

    #[test]
    fn test_format_empty_source() {
        assert!(format("", &FormatOptions::default()).is_empty());
        assert!(format("   \n\t  ", &FormatOptions::default()).is_empty());
    }

    #[test]
    fn test_parse_error() {
        let result = format_script_content("const = ;", &FormatOptions::default());
        assert!(matches!(result, Err(FormatError::ScriptParseError(_))));
    }

    #[test]
    fn test_single_quote() {
        let options = FormatOptions {
            single_quote: true,
            ..Default::default()
        };
        assert!(format("const a = \"x\";", &options).contains("'x'"));
    }

    #[test]
    fn test_no_semicolons() {
        let options = FormatOptions {
            semi: false,
            ..Default::default()
        };
        let result = format("const a = 1;\nconst b = 'a;';", &options);
        assert!(result.contains("const a = 1\n"));
        assert!(result.contains("\"a;\""));
    }

    #[test]
    fn test_semicolon_kept_before_paren() {
        assert_eq!(
            remove_optional_semicolons_fast(b"a;\n(b);\n"),
            b"a;\n(b)\n".to_vec()
        );
    }

    #[test]
    fn test_bracket_spacing_off() {
        let options = FormatOptions {
            bracket_spacing: false,
            ..Default::default()
        };
        let result = format("import { View } from 'react-native';\nconst { a } = b;", &options);
        assert!(result.contains("import {View}"), "{result}");
        assert!(result.contains("const {a} = b;"), "{result}");
    }

    #[test]
    fn test_bracket_spacing_skips_jsx() {
        let options = FormatOptions {
            bracket_spacing: false,
            ..Default::default()
        };
        let result = format("<Text style={styles.title}>{ label }</Text>;", &options);
        assert!(result.contains("style={styles.title}"), "{result}");
    }

    #[test]
    fn test_trailing_commas_on_multiline_lists() {
        let generated = "import {\n\tA,\n\tB\n} from \"x\";\nconst o = {\n\ta: [1, 2],\n\tb: 2\n};\n";
        assert_eq!(
            edit(generated, &FormatOptions::default()),
            "import {\n\tA,\n\tB,\n} from \"x\";\nconst o = {\n\ta: [1, 2],\n\tb: 2,\n};\n"
        );

        let options = FormatOptions {
            trailing_comma: TrailingComma::None,
            ..Default::default()
        };
        assert_eq!(edit(generated, &options), generated);
    }

    #[test]
    fn test_trailing_comma_not_after_rest() {
        let generated = "const {\n\ta,\n\t...rest\n} = b;\n";
        assert_eq!(edit(generated, &FormatOptions::default()), generated);
    }

    #[test]
    fn test_existing_trailing_comma_is_kept() {
        let generated = "const o = {\n\ta: 1,\n\tb: 2,\n};\n";
        assert_eq!(edit(generated, &FormatOptions::default()), generated);
    }

    #[test]
    fn test_indent_with_tabs() {
        let options = FormatOptions {
            use_tabs: true,
            ..Default::default()
        };
        let result = format("function f() { return 1; }", &options);
        assert!(result.contains("\n\treturn 1;"), "{result}");
    }

    #[test]
    fn test_indent_with_spaces() {
        let result = format("function f() { return 1; }", &FormatOptions::default());
        assert!(result.contains("\n  return 1;"), "{result}");
    }

    #[test]
    fn test_literal_len() {
        assert_eq!(literal_len(b"'a;b' x", 0), Some(5));
        assert_eq!(literal_len(b"'don\nt'", 0), None);
        assert_eq!(literal_len(b"// c;\nx", 0), Some(5));
        assert_eq!(literal_len(b"/* ; */x", 0), Some(7));
        assert_eq!(literal_len(b"a", 0), None);
    }

    #[test]
    fn test_template_literal_text_is_kept() {
        let source = "const s = `\n\tline  \n`;\nfunction f() { return `a  \n\t${x}\n`; }\n";
        let result = format(source, &FormatOptions::default());
        assert!(result.starts_with("const s = `\n\tline  \n`;\n"), "{result:?}");
        assert!(result.contains("\n  return `a  \n\t${x}\n`;\n"), "{result:?}");
    }

    #[test]
    fn test_template_ranges_follow_edits() {
        let options = FormatOptions {
            bracket_spacing: false,
            ..Default::default()
        };
        let generated = "const { a } = b;\nconst s = `x\n\ty `;\n";
        let edited = apply_syntax_edits(generated, &options).unwrap();
        assert_eq!(edited.code, "const {a} = b;\nconst s = `x\n\ty `;\n");
        let template = &edited.templates[0];
        assert_eq!(&edited.code[template.clone()], "x\n\ty ");
    }

    #[test]
    fn test_dropped_comments_are_an_error() {
        let result = format_script_content("const x = 1; // trailing note\n", &FormatOptions::default());
        assert!(
            matches!(result, Err(FormatError::CommentsDropped { expected: 1, printed: 0 })),
            "{result:?}"
        );
    }

    #[test]
    fn test_leading_comment_is_kept() {
        let result = format("// header\nconst x = 1;", &FormatOptions::default());
        assert_eq!(result, "// header\nconst x = 1;\n");
    }
}
