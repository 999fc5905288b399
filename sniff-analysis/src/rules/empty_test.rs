//! Empty Test — a test case whose body has no statements.

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::ast::{Node, NodeKind};
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct EmptyTest;

fn has_empty_body(arg: &Node) -> bool {
    match &arg.kind {
        NodeKind::Function { body: Some(body), .. } => {
            matches!(&body.kind, NodeKind::Block { statements } if statements.is_empty())
        }
        _ => false,
    }
}

impl Rule for EmptyTest {
    fn name(&self) -> &'static str {
        "Empty Test"
    }

    fn package(&self) -> &'static str {
        "emptyTest"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            let Some((_, args)) = test_case.as_call() else {
                return;
            };
            if args.iter().any(has_empty_body) {
                results.push(smell_at(test_case));
            }
        });
        results
    }
}
