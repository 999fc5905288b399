//! Rule runner — executes the registered catalog against one parsed file.
//!
//! Rules are isolated from each other: a panicking rule is caught, logged,
//! and the remaining rules still run. Execution order must not affect
//! output, and empty results are dropped rather than stored.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::frame;
use crate::lang;
use crate::registry::RuleRegistry;
use crate::rules::RuleContext;
use crate::types::{Detection, RuleResult, Smell, SourceUnit};

/// Run every registered rule against a file and assemble the immutable
/// per-file aggregate.
pub fn run_rules(
    registry: &RuleRegistry,
    unit: &SourceUnit,
    ctx: &RuleContext<'_>,
    context_lines: u32,
) -> Detection {
    let mut results = Vec::new();
    let mut total_smells = 0usize;

    for rule in registry.instantiate() {
        let outcome = catch_unwind(AssertUnwindSafe(|| rule.detect(unit, ctx)));
        match outcome {
            Ok(smells) if !smells.is_empty() => {
                total_smells += smells.len();
                let items = smells
                    .into_iter()
                    .map(|smell| attach_frame(smell, unit, rule.name(), context_lines))
                    .collect();
                results.push(RuleResult {
                    rule_name: rule.name().to_string(),
                    package_identifier: rule.package().to_string(),
                    items,
                });
            }
            Ok(_) => {}
            Err(_) => {
                // Isolate-and-continue: one faulty rule must not take the
                // rest of the file's analysis down with it.
                tracing::warn!(
                    rule = rule.name(),
                    path = %unit.path.display(),
                    "rule panicked; skipping its results for this file"
                );
            }
        }
    }

    Detection {
        path: unit.path.clone(),
        text: unit.text.clone(),
        test_cases: lang::count_test_cases(&unit.tree),
        total_smells,
        results,
    }
}

fn attach_frame(mut smell: Smell, unit: &SourceUnit, rule_name: &str, context_lines: u32) -> Smell {
    smell.frame = Some(frame::render(&unit.text, smell.location, context_lines, rule_name));
    smell
}
