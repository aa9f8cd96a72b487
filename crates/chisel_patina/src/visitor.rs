//! Reference collection over a parsed program.
//!
//! Scope rules share one walk: it records every identifier reference that
//! the semantic pass could not bind, the spans of exported declarations,
//! and whether any JSX appears.

use chisel_carton::CompactString;
use oxc_ast::ast::{
    ExportDefaultDeclaration, ExportNamedDeclaration, Expression, IdentifierReference,
    JSXElementName, JSXFragment, JSXOpeningElement, Program, UnaryExpression,
};
use oxc_ast_visit::{walk, Visit};
use oxc_semantic::Scoping;
use oxc_span::Span;
use oxc_syntax::operator::UnaryOperator;

/// A reference that resolves to no declaration in the analyzed text
#[derive(Debug, Clone)]
pub struct UnresolvedReference {
    /// Referenced name
    pub name: CompactString,
    /// Location of the reference
    pub span: Span,
    /// Whether the reference names a JSX element (`<Card>`, `<Card.Title>`)
    pub in_jsx_name: bool,
}

/// Facts about references collected once per verification pass
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    /// Unresolved references in source order
    pub unresolved: Vec<UnresolvedReference>,
    /// Spans of `export` declarations
    pub export_spans: Vec<Span>,
    /// Whether the program contains a JSX element or fragment
    pub has_jsx: bool,
}

impl ReferenceIndex {
    /// Walk `program` and collect references using its scoping
    pub fn build(program: &Program<'_>, scoping: &Scoping) -> Self {
        let mut collector = ReferenceCollector {
            scoping,
            index: ReferenceIndex::default(),
            in_jsx_name: false,
        };
        collector.visit_program(program);
        collector.index
    }

    /// Check if a declaration at `span` is part of an export
    #[inline]
    pub fn is_exported(&self, span: Span) -> bool {
        self.export_spans
            .iter()
            .any(|export| export.start <= span.start && span.end <= export.end)
    }
}

struct ReferenceCollector<'s> {
    scoping: &'s Scoping,
    index: ReferenceIndex,
    in_jsx_name: bool,
}

impl<'a> Visit<'a> for ReferenceCollector<'_> {
    fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
        let Some(reference_id) = ident.reference_id.get() else {
            return;
        };
        if self.scoping.get_reference(reference_id).symbol_id().is_some() {
            return;
        }
        self.index.unresolved.push(UnresolvedReference {
            name: CompactString::from(ident.name.as_str()),
            span: ident.span,
            in_jsx_name: self.in_jsx_name,
        });
    }

    fn visit_jsx_opening_element(&mut self, elem: &JSXOpeningElement<'a>) {
        self.index.has_jsx = true;
        walk::walk_jsx_opening_element(self, elem);
    }

    fn visit_jsx_fragment(&mut self, fragment: &JSXFragment<'a>) {
        self.index.has_jsx = true;
        walk::walk_jsx_fragment(self, fragment);
    }

    fn visit_jsx_element_name(&mut self, name: &JSXElementName<'a>) {
        let outer = std::mem::replace(&mut self.in_jsx_name, true);
        walk::walk_jsx_element_name(self, name);
        self.in_jsx_name = outer;
    }

    fn visit_unary_expression(&mut self, expr: &UnaryExpression<'a>) {
        // `typeof x` is the sanctioned way to test for an undeclared global
        if expr.operator == UnaryOperator::Typeof
            && matches!(expr.argument, Expression::Identifier(_))
        {
            return;
        }
        walk::walk_unary_expression(self, expr);
    }

    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        if decl.declaration.is_some() {
            self.index.export_spans.push(decl.span);
        }
        walk::walk_export_named_declaration(self, decl);
    }

    fn visit_export_default_declaration(&mut self, decl: &ExportDefaultDeclaration<'a>) {
        self.index.export_spans.push(decl.span);
        walk::walk_export_default_declaration(self, decl);
    }
}
