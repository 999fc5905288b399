//! Redundant Print — console output inside a test case.

use super::{for_each_test_case, Rule, RuleContext};
use crate::lang;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct RedundantPrint;

impl Rule for RedundantPrint {
    fn name(&self) -> &'static str {
        "Redundant Print"
    }

    fn package(&self) -> &'static str {
        "redundantPrint"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            test_case.walk(&mut |node| {
                if lang::is_console(node) {
                    if let Some((object, _)) = node.as_member() {
                        results.push(Smell::new(object.span.start));
                    }
                }
            });
        });
        results
    }
}
