//! Exception Handling — try/catch or throw inside a test case.
//!
//! Tests should delegate exception checks to the framework's own matchers
//! instead of hand-rolling control flow around them.

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::ast::NodeKind;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct ExceptionHandling;

impl Rule for ExceptionHandling {
    fn name(&self) -> &'static str {
        "Exception Handling"
    }

    fn package(&self) -> &'static str {
        "exceptionHandling"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            test_case.walk(&mut |node| {
                if matches!(node.kind, NodeKind::TryCatch { .. } | NodeKind::Throw { .. }) {
                    results.push(smell_at(node));
                }
            });
        });
        results
    }
}
