//! no-multiple-empty-lines
//!
//! Disallow more than one consecutive blank line. Whitespace-only lines
//! count as blank.

use super::lines_with_offsets;
use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, TextEdit};
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "no-multiple-empty-lines",
    fixable: true,
    requires_semantic: false,
};

const MAX_BLANK_LINES: usize = 1;

/// Disallow consecutive blank lines
pub struct NoMultipleEmptyLines;

impl Rule for NoMultipleEmptyLines {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let source = ctx.source;
        // Start offsets of the blank lines in the current run
        let mut run: Vec<u32> = Vec::new();
        let mut excess: Vec<(u32, u32)> = Vec::new();

        for (offset, line) in lines_with_offsets(source) {
            if line.trim().is_empty() {
                run.push(offset);
                continue;
            }
            if run.len() > MAX_BLANK_LINES {
                excess.push((run[MAX_BLANK_LINES], offset));
            }
            run.clear();
        }
        if run.len() > MAX_BLANK_LINES {
            excess.push((run[MAX_BLANK_LINES], source.len() as u32));
        }

        for (start, end) in excess {
            ctx.report(
                LintDiagnostic::error(
                    META.name,
                    "More than 1 blank line not allowed.",
                    start,
                    end,
                )
                .with_fix(Fix::new(TextEdit::delete(start, end))),
            );
        }
    }
}
