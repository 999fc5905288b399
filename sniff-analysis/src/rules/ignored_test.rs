//! Ignored Test — skipped tests and suites left in the codebase.

use super::{Rule, RuleContext};
use crate::lang;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct IgnoredTest;

impl Rule for IgnoredTest {
    fn name(&self) -> &'static str {
        "Ignored Test"
    }

    fn package(&self) -> &'static str {
        "ignoredTest"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        unit.tree.walk(&mut |node| {
            if lang::is_describe_ignored(node)
                || lang::is_test_case_ignored(node)
                || lang::is_this_expression_ignored(node)
            {
                // Flag the `.skip` marker itself, not the whole call.
                if let Some(location) = lang::callee_property_location(node) {
                    results.push(Smell::new(location));
                }
            }
        });
        results
    }
}
