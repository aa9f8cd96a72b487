//! no-unused-vars
//!
//! Disallow declarations that are never read.
//!
//! Function parameters use the "after-used" policy: a positional parameter
//! is only reported when no parameter declared after it is read. Exported
//! declarations, the names of function and class expressions and caught
//! errors are never reported.
//!
//! Reads that only feed the binding itself do not count as uses:
//! - references from inside the binding's own function or class;
//! - `a++` and `a += 1` in statement position;
//! - `a = a + 1` in statement position.
//!
//! When the program contains JSX, a `React` binding is used by the JSX
//! pragma.
//!
//! ## Examples
//!
//! ### Invalid
//! ```jsx
//! const title = "Hello";
//! const Card = ({ subtitle }) => <View />;
//! ```
//!
//! ### Valid
//! ```jsx
//! const title = "Hello";
//! export const Card = (_props, ref) => <View ref={ref}>{title}</View>;
//! ```

use chisel_carton::FxHashMap;
use oxc_ast::ast::{AssignmentTarget, Expression};
use oxc_ast::AstKind;
use oxc_semantic::{AstNodes, Reference, Semantic, SymbolId};
use oxc_span::{GetSpan, Span};
use oxc_syntax::node::NodeId;
use oxc_syntax::scope::ScopeId;

use crate::context::LintContext;
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "no-unused-vars",
    fixable: false,
    requires_semantic: true,
};

/// Disallow unused variables
pub struct NoUnusedVars;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Binding {
    /// Positional parameter (`a`, `a = 1`)
    PositionalParam,
    /// Name bound inside a destructured parameter
    DestructuredParam,
    /// Variable with an initializer, or any binding that is written later
    Assigned,
    /// Any other declaration (functions, classes, imports)
    Declared,
    /// Never reported
    Ignored,
}

struct Candidate<'s> {
    name: &'s str,
    start: u32,
    end: u32,
    scope: ScopeId,
    binding: Binding,
}

impl Rule for NoUnusedVars {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let (Some(semantic), Some(references)) = (ctx.semantic(), ctx.references()) else {
            return;
        };
        let scoping = semantic.scoping();

        // Last read parameter start per function scope
        let mut last_read_param: FxHashMap<ScopeId, u32> = FxHashMap::default();
        let mut unused: Vec<Candidate<'_>> = Vec::new();

        for symbol_id in scoping.symbol_ids() {
            let span = scoping.symbol_span(symbol_id);
            let scope = scoping.symbol_scope_id(symbol_id);

            let mut binding = match semantic.symbol_declaration(symbol_id).kind() {
                AstKind::FormalParameter(param) if param.span.start == span.start => {
                    Binding::PositionalParam
                }
                AstKind::FormalParameter(_) => Binding::DestructuredParam,
                AstKind::CatchParameter(_) => Binding::Ignored,
                AstKind::Function(func) if func.is_expression() => Binding::Ignored,
                AstKind::Class(class) if class.is_expression() => Binding::Ignored,
                AstKind::VariableDeclarator(decl) if decl.init.is_some() => Binding::Assigned,
                _ => Binding::Declared,
            };

            let own_body = own_body_span(semantic.symbol_declaration(symbol_id).kind());
            let mut is_read = references.has_jsx && scoping.symbol_name(symbol_id) == JSX_PRAGMA;
            let mut is_written = false;
            for reference in semantic.symbol_references(symbol_id) {
                is_read |= reference.is_read()
                    && !reads_for_itself(semantic, reference, symbol_id, own_body);
                is_written |= reference.is_write();
            }

            if is_read {
                if matches!(binding, Binding::PositionalParam | Binding::DestructuredParam) {
                    let last = last_read_param.entry(scope).or_insert(span.start);
                    *last = (*last).max(span.start);
                }
                continue;
            }
            if binding == Binding::Ignored || references.is_exported(span) {
                continue;
            }
            if binding == Binding::Declared && is_written {
                binding = Binding::Assigned;
            }

            unused.push(Candidate {
                name: scoping.symbol_name(symbol_id),
                start: span.start,
                end: span.end,
                scope,
                binding,
            });
        }

        for candidate in unused {
            if candidate.binding == Binding::PositionalParam
                && last_read_param
                    .get(&candidate.scope)
                    .is_some_and(|&last| last > candidate.start)
            {
                continue;
            }
            let action = match candidate.binding {
                Binding::Assigned => "assigned a value",
                _ => "defined",
            };
            ctx.report_at(
                format!("'{}' is {} but never used.", candidate.name, action),
                candidate.start,
                candidate.end,
            );
        }
    }
}

/// Binding the classic JSX runtime reads implicitly
const JSX_PRAGMA: &str = "React";

/// Body of a function or class bound to the declared name
fn own_body_span(declaration: AstKind<'_>) -> Option<Span> {
    match declaration {
        AstKind::Function(func) => Some(func.span),
        AstKind::Class(class) => Some(class.span),
        AstKind::VariableDeclarator(decl) => match &decl.init {
            Some(
                init @ (Expression::FunctionExpression(_) | Expression::ArrowFunctionExpression(_)),
            ) => Some(init.span()),
            _ => None,
        },
        _ => None,
    }
}

/// Check if a read reference only serves to compute a new value of `symbol_id`
fn reads_for_itself(
    semantic: &Semantic<'_>,
    reference: &Reference,
    symbol_id: SymbolId,
    own_body: Option<Span>,
) -> bool {
    let nodes = semantic.nodes();
    let node_id = reference.node_id();

    if let Some(body) = own_body {
        let span = nodes.kind(node_id).span();
        if body.start <= span.start && span.end <= body.end {
            return true;
        }
    }

    if reference.is_write() {
        return updates_in_statement(nodes, node_id);
    }
    reassigns_in_statement(semantic, node_id, symbol_id)
}

/// `a++`, `--a` or `a op= b` whose value is discarded
fn updates_in_statement(nodes: &AstNodes<'_>, node_id: NodeId) -> bool {
    let mut current = node_id;
    while let Some(parent) = nodes.parent_id(current) {
        match nodes.kind(parent) {
            AstKind::SimpleAssignmentTarget(_)
            | AstKind::AssignmentTarget(_)
            | AstKind::ParenthesizedExpression(_) => current = parent,
            AstKind::UpdateExpression(_) => return is_discarded(nodes, parent),
            AstKind::AssignmentExpression(assign) => {
                return !assign.operator.is_logical() && is_discarded(nodes, parent)
            }
            _ => return false,
        }
    }
    false
}

/// Read inside `a = <expr>` where `a` is the same binding and the
/// assignment value is discarded
fn reassigns_in_statement(semantic: &Semantic<'_>, node_id: NodeId, symbol_id: SymbolId) -> bool {
    let nodes = semantic.nodes();
    let scoping = semantic.scoping();
    for ancestor in nodes.ancestor_ids(node_id) {
        match nodes.kind(ancestor) {
            AstKind::Function(_) | AstKind::ArrowFunctionExpression(_) | AstKind::Class(_) => {
                return false
            }
            AstKind::AssignmentExpression(assign) => {
                let AssignmentTarget::AssignmentTargetIdentifier(target) = &assign.left else {
                    return false;
                };
                let assigns_self = target
                    .reference_id
                    .get()
                    .and_then(|id| scoping.get_reference(id).symbol_id())
                    == Some(symbol_id);
                return assigns_self && is_discarded(nodes, ancestor);
            }
            _ => {}
        }
    }
    false
}

/// Check if the value of the expression at `node_id` is unused
fn is_discarded(nodes: &AstNodes<'_>, node_id: NodeId) -> bool {
    let mut current = node_id;
    while let Some(parent) = nodes.parent_id(current) {
        match nodes.kind(parent) {
            AstKind::ParenthesizedExpression(_) => current = parent,
            AstKind::ExpressionStatement(_) => return true,
            _ => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleConfig, RuleLevel};
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NoUnusedVars));
        Linter::with_registry(registry)
    }

    fn unused(source: &str) -> Vec<String> {
        let config = RuleConfig::new("test").with_rule("no-unused-vars", RuleLevel::Error);
        create_linter()
            .extract_entity_names(source, &config)
            .unwrap()
    }

    #[test]
    fn test_valid_read_variable() {
        assert!(unused("const a = 1; console.log(a);").is_empty());
    }

    #[test]
    fn test_invalid_unread_variable() {
        assert_eq!(unused("const title = 'Hi'; const x = 2; x;"), vec!["title"]);
    }

    #[test]
    fn test_messages() {
        let config = RuleConfig::new("test").with_rule("no-unused-vars", RuleLevel::Error);
        let diagnostics = create_linter()
            .verify("let a = 1; function f() {} let b; b = 2;", &config)
            .unwrap();
        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "'a' is assigned a value but never used.",
                "'f' is defined but never used.",
                "'b' is assigned a value but never used.",
            ]
        );
    }

    #[test]
    fn test_jsx_usage_counts_as_read() {
        let source = "import Card from './Card';\nconst Title = () => null;\n<Card><Title /></Card>;";
        assert!(unused(source).is_empty());
    }

    #[test]
    fn test_after_used_params() {
        // `a` precedes the read `b`, only `c` is reported
        assert_eq!(
            unused("export function f(a, b, c) { return b; }"),
            vec!["c"]
        );
    }

    #[test]
    fn test_destructured_params_always_checked() {
        assert_eq!(
            unused("export const Card = ({ title, subtitle }) => title;"),
            vec!["subtitle"]
        );
    }

    #[test]
    fn test_exported_declarations_are_ignored() {
        assert!(unused("export const a = 1; export default function App() {}").is_empty());
    }

    #[test]
    fn test_function_expression_name_is_ignored() {
        assert!(unused("export const f = function inner() {};").is_empty());
    }

    #[test]
    fn test_caught_error_is_ignored() {
        assert!(unused("try { run(); } catch (error) {}").is_empty());
    }

    #[test]
    fn test_recursive_function_is_unused() {
        assert_eq!(unused("function f() { f(); }"), vec!["f"]);
        assert_eq!(unused("const g = () => g();"), vec!["g"]);
        assert!(unused("function f(n) { return n && f(n - 1); }\nf(3);").is_empty());
    }

    #[test]
    fn test_self_updates_are_not_uses() {
        assert_eq!(unused("let a = 1; a++;"), vec!["a"]);
        assert_eq!(unused("let b = 1; b += 2;"), vec!["b"]);
        assert_eq!(unused("let c = []; c = c.concat(1);"), vec!["c"]);
        assert!(unused("let d = 1; const e = d++; e;").is_empty());
        assert!(unused("let i = 0; for (;;) { if (i++ > 3) break; }").is_empty());
    }

    #[test]
    fn test_react_is_used_by_jsx() {
        let source = "import React from 'react';\nimport { Foo } from 'x';\n<View />;";
        assert_eq!(unused(source), vec!["Foo"]);
        assert_eq!(unused("import React from 'react';\nconst a = 1;\na;"), vec!["React"]);
    }
}
