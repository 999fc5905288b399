//! Conditional Test Logic — branching or looping inside a test case.

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::ast::NodeKind;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct ConditionalTestLogic;

impl Rule for ConditionalTestLogic {
    fn name(&self) -> &'static str {
        "Conditional Test Logic"
    }

    fn package(&self) -> &'static str {
        "conditionalTestLogic"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            test_case.walk(&mut |node| match &node.kind {
                NodeKind::If { .. }
                | NodeKind::ForLoop { .. }
                | NodeKind::ForIn { .. }
                | NodeKind::While { .. }
                | NodeKind::DoWhile { .. }
                | NodeKind::Switch { .. } => results.push(smell_at(node)),
                // `[..].forEach(..)` is a loop in disguise; flag the method.
                NodeKind::Call { callee, .. } => {
                    if let NodeKind::Member { object, property, property_span } = &callee.kind {
                        if property == "forEach"
                            && matches!(object.kind, NodeKind::ArrayLit { .. })
                        {
                            results.push(Smell::new(property_span.start));
                        }
                    }
                }
                _ => {}
            });
        });
        results
    }
}
