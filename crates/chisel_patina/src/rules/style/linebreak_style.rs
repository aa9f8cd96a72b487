//! linebreak-style
//!
//! Enforce Unix (`\n`) line breaks.

use memchr::memmem;

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, TextEdit};
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "linebreak-style",
    fixable: true,
    requires_semantic: false,
};

/// Enforce LF line breaks
pub struct LinebreakStyle;

impl Rule for LinebreakStyle {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let source = ctx.source;
        for position in memmem::find_iter(source.as_bytes(), b"\r\n") {
            let start = position as u32;
            ctx.report(
                LintDiagnostic::error(
                    META.name,
                    "Expected linebreaks to be 'LF' but found 'CRLF'.",
                    start,
                    start + 2,
                )
                .with_fix(Fix::new(TextEdit::delete(start, start + 1))),
            );
        }
    }
}
