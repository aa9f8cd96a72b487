//! no-tabs
//!
//! Disallow tab characters in indentation. The fix replaces each tab with
//! two spaces.

use super::lines_with_offsets;
use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, TextEdit};
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "no-tabs",
    fixable: true,
    requires_semantic: false,
};

const TAB_WIDTH: &str = "  ";

/// Disallow indentation tabs
pub struct NoTabs;

impl Rule for NoTabs {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let source = ctx.source;
        for (offset, line) in lines_with_offsets(source) {
            let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
            let indent = &line[..indent_len];
            if !indent.contains('\t') {
                continue;
            }
            let start = offset;
            let end = offset + indent_len as u32;
            let fix = Fix::new(TextEdit::replace(start, end, indent.replace('\t', TAB_WIDTH)));
            ctx.report(
                LintDiagnostic::error(META.name, "Unexpected tab character.", start, end).with_fix(fix),
            );
        }
    }
}
