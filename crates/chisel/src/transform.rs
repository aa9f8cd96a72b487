//! Source transformer.
//!
//! Rewrites TSX into the JSX dialect the identifier analyzer parses:
//! TypeScript syntax is stripped, markup and modern syntax are kept.
//! Stripping also elides imports whose bindings are never used as values.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{JsxOptions, TransformOptions, Transformer, TypeScriptOptions};

use crate::error::TransformError;

/// Transform TSX source into analyzable JSX.
///
/// Deterministic: the same input always yields the same output.
pub fn transform(code: &str) -> Result<String, TransformError> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, code, SourceType::tsx()).parse();

    if parsed.panicked || !parsed.errors.is_empty() {
        return Err(TransformError::Parse(join_messages(&parsed.errors)));
    }

    let mut program = parsed.program;

    let semantic_ret = SemanticBuilder::new().build(&program);
    if !semantic_ret.errors.is_empty() {
        return Err(TransformError::Semantic(join_messages(&semantic_ret.errors)));
    }
    let scoping = semantic_ret.semantic.into_scoping();

    let transform_ret = Transformer::new(&allocator, Path::new("fragment.tsx"), &transform_options())
        .build_with_scoping(scoping, &mut program);
    if !transform_ret.errors.is_empty() {
        return Err(TransformError::Transform(join_messages(&transform_ret.errors)));
    }

    Ok(Codegen::new().build(&program).code)
}

/// TypeScript stripping only; JSX stays as markup
fn transform_options() -> TransformOptions {
    TransformOptions {
        typescript: TypeScriptOptions {
            allow_namespaces: true,
            ..Default::default()
        },
        jsx: JsxOptions {
            jsx_plugin: false,
            display_name_plugin: false,
            jsx_self_plugin: false,
            jsx_source_plugin: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn join_messages<E: std::fmt::Display>(errors: &[E]) -> String {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    messages.join("\n")
}
