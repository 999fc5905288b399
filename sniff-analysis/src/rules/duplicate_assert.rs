//! Duplicate Assert — the same assertion text repeated within a test case.

use sniff_core::types::collections::FxHashMap;

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::lang;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct DuplicateAssert;

impl Rule for DuplicateAssert {
    fn name(&self) -> &'static str {
        "Duplicate Assert"
    }

    fn package(&self) -> &'static str {
        "duplicateAssert"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            let mut callings = Vec::new();
            test_case.walk(&mut |node| {
                if lang::is_assertion(node)
                    || lang::is_chai_assert(node)
                    || lang::is_chai_bdd(node)
                    || lang::is_jest(node)
                {
                    callings.push(node);
                }
            });
            if callings.len() < 2 {
                return;
            }
            // Compare by full call-expression source text.
            let mut occurrences: FxHashMap<&str, usize> = FxHashMap::default();
            for node in &callings {
                *occurrences.entry(node.span.text(&unit.text)).or_default() += 1;
            }
            results.extend(
                callings
                    .iter()
                    .filter(|node| occurrences[node.span.text(&unit.text)] > 1)
                    .map(|node| smell_at(node)),
            );
        });
        results
    }
}
