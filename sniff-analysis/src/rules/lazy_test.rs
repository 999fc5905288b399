//! Lazy Test — the same production symbol exercised from several test cases.
//!
//! The counterpart of Eager Test: calling one production symbol once each
//! from two different test cases splits a behavior check across tests.

use sniff_core::types::collections::{FxHashMap, FxHashSet};

use super::{for_each_test_case, Rule, RuleContext};
use crate::resolve;
use crate::types::{Location, Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct LazyTest;

impl Rule for LazyTest {
    fn name(&self) -> &'static str {
        "Lazy Test"
    }

    fn package(&self) -> &'static str {
        "lazyTest"
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

        // First call site of each distinct symbol, per test case.
        let mut findings: Vec<(String, Location)> = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            let mut seen_in_test: FxHashSet<&str> = FxHashSet::default();
            test_case.walk(&mut |node| {
                let Some((callee, _)) = node.as_call() else {
                    return;
                };
                let Some(name) = callee.as_identifier() else {
                    return;
                };
                if symbols.contains(name) && seen_in_test.insert(name) {
                    findings.push((name.to_string(), node.span.start));
                }
            });
        });

        // A symbol appearing under two or more test cases is lazy; each
        // test case's first call site is flagged.
        let mut occurrences: FxHashMap<&str, usize> = FxHashMap::default();
        for (name, _) in &findings {
            *occurrences.entry(name.as_str()).or_default() += 1;
        }
        findings
            .iter()
            .filter(|(name, _)| occurrences[name.as_str()] > 1)
            .map(|(_, location)| Smell::new(*location))
            .collect()
    }
}
