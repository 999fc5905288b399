//! Eager Test — one test case exercising several production calls.

use sniff_core::types::collections::FxHashSet;

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::resolve;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct EagerTest;

impl Rule for EagerTest {
    fn name(&self) -> &'static str {
        "Eager Test"
    }

    fn package(&self) -> &'static str {
        "eagerTest"
    }

    fn detect(&self, unit: &SourceUnit, ctx: &RuleContext<'_>) -> Vec<Smell> {
        if !ctx.follow_imports {
            return Vec::new();
        }
        let symbols: FxHashSet<String> = resolve::production_symbols(&unit.tree, ctx.base_dir)
            .into_iter()
            .map(|symbol| symbol.name)
            .collect();
        if symbols.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            let mut callings = Vec::new();
            test_case.walk(&mut |node| {
                if let Some((callee, _)) = node.as_call() {
                    if callee
                        .as_identifier()
                        .is_some_and(|name| symbols.contains(name))
                    {
                        callings.push(node);
                    }
                }
            });
            // Two or more production calls in one test case: every call
            // site is part of the smell.
            if callings.len() > 1 {
                results.extend(callings.iter().map(|node| smell_at(node)));
            }
        });
        results
    }
}
